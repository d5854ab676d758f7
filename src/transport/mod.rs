// Outbound message transport
//
// The rest of the crate only sees `MessageSender::send`, which never errors:
// every failure comes back as `SendOutcome::Failed` so the caller can log it
// and leave the history untouched.

use async_trait::async_trait;
use thiserror::Error;

pub mod twilio;

pub use twilio::{TwilioConfig, TwilioSender};

/// Why a message was not delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendFailure {
    /// Required credentials are not configured.
    #[error("missing configuration: {}", .missing.join(", "))]
    ConfigMissing { missing: Vec<&'static str> },

    /// The request never got a response (DNS, TLS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result of a single send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { message_id: Option<String> },
    Failed(SendFailure),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

/// Anything that can deliver a text message to the configured recipient.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `body`. No retries: a failure is reported once and the caller moves on.
    async fn send(&self, body: &str) -> SendOutcome;

    /// Short name used in logs (e.g. "twilio").
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_missing_lists_variables() {
        let failure = SendFailure::ConfigMissing {
            missing: vec!["TWILIO_ACCOUNT_SID", "TWILIO_AUTH_TOKEN"],
        };
        assert_eq!(
            failure.to_string(),
            "missing configuration: TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN"
        );
    }

    #[test]
    fn test_is_sent() {
        assert!(SendOutcome::Sent { message_id: None }.is_sent());
        assert!(!SendOutcome::Failed(SendFailure::Transport("down".into())).is_sent());
    }
}
