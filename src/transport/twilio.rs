// Twilio WhatsApp sender
//
// POSTs to the Twilio Messages API with HTTP basic auth. Numbers are sent with
// the `whatsapp:` channel prefix Twilio expects.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use super::{MessageSender, SendFailure, SendOutcome};
use crate::config::constants::{
    ENV_ACCOUNT_SID, ENV_AUTH_TOKEN, ENV_FROM_NUMBER, ENV_RECIPIENT_NUMBER,
};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Credentials and endpoint for the Twilio API. Any credential may be absent;
/// the sender reports which ones at send time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub api_base: String,
}

impl TwilioConfig {
    /// Read the four credentials from the process environment.
    pub fn from_env(api_base: impl Into<String>) -> Self {
        Self::from_lookup(api_base, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup<F>(api_base: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            account_sid: get(ENV_ACCOUNT_SID),
            auth_token: get(ENV_AUTH_TOKEN),
            from_number: get(ENV_FROM_NUMBER),
            to_number: get(ENV_RECIPIENT_NUMBER),
            api_base: api_base.into(),
        }
    }

    /// Names of the environment variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (ENV_ACCOUNT_SID, &self.account_sid),
            (ENV_AUTH_TOKEN, &self.auth_token),
            (ENV_FROM_NUMBER, &self.from_number),
            (ENV_RECIPIENT_NUMBER, &self.to_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: Option<String>,
}

/// Sends WhatsApp messages through Twilio
#[derive(Clone)]
pub struct TwilioSender {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSender {
    pub fn new(config: TwilioConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }

    fn messages_url(&self, account_sid: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            account_sid
        )
    }

    async fn post_message(
        &self,
        account_sid: &str,
        auth_token: &str,
        from: &str,
        to: &str,
        body: &str,
    ) -> std::result::Result<Option<String>, SendFailure> {
        let from = whatsapp_address(from);
        let to = whatsapp_address(to);
        let url = self.messages_url(account_sid);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&[("From", from.as_str()), ("To", to.as_str()), ("Body", body)])
            .send()
            .await
            .map_err(|e| SendFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendFailure::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx without a parseable body still means the message was accepted.
        let sid = response
            .json::<MessageResource>()
            .await
            .ok()
            .and_then(|m| m.sid);
        Ok(sid)
    }
}

#[async_trait]
impl MessageSender for TwilioSender {
    async fn send(&self, body: &str) -> SendOutcome {
        let (Some(sid), Some(token), Some(from), Some(to)) = (
            self.config.account_sid.as_deref(),
            self.config.auth_token.as_deref(),
            self.config.from_number.as_deref(),
            self.config.to_number.as_deref(),
        ) else {
            let failure = SendFailure::ConfigMissing {
                missing: self.config.missing(),
            };
            error!("Twilio credentials not found ({}). Set them in the environment.", failure);
            return SendOutcome::Failed(failure);
        };

        match self.post_message(sid, token, from, to, body).await {
            Ok(message_id) => {
                info!(
                    "Message sent successfully with SID: {}",
                    message_id.as_deref().unwrap_or("<unknown>")
                );
                SendOutcome::Sent { message_id }
            }
            Err(failure) => {
                error!("Error sending message: {}", failure);
                SendOutcome::Failed(failure)
            }
        }
    }

    fn name(&self) -> &str {
        "twilio"
    }
}

fn whatsapp_address(number: &str) -> String {
    if number.starts_with(WHATSAPP_PREFIX) {
        number.to_string()
    } else {
        format!("{}{}", WHATSAPP_PREFIX, number)
    }
}
