// Configuration structs

use chrono::NaiveTime;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::*;
use crate::errors::VocabError;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list
    pub vocab_file: PathBuf,

    /// Persisted learning history
    pub history_file: PathBuf,

    /// JSONL record of send attempts (`None` disables it)
    pub delivery_log: Option<PathBuf>,

    /// Local time of the daily send
    pub send_time: NaiveTime,

    /// Scheduler wake-up interval
    pub poll_interval: Duration,

    /// Twilio API endpoint (overridable for testing)
    pub twilio_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocab_file: PathBuf::from(DEFAULT_VOCAB_FILE),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            delivery_log: Some(PathBuf::from(DEFAULT_DELIVERY_LOG)),
            send_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            twilio_api_base: DEFAULT_TWILIO_API_BASE.to_string(),
        }
    }
}

/// On-disk form of the config file; every key is optional.
///
/// Transport credentials are never read from the file, only from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub vocab_file: Option<PathBuf>,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    #[serde(default)]
    pub delivery_log: Option<PathBuf>,
    /// Set to `false` to stop writing the delivery log.
    #[serde(default)]
    pub delivery_log_enabled: Option<bool>,
    #[serde(default)]
    pub send_time: Option<String>,
    #[serde(default)]
    pub poll_interval_secs: Option<u64>,
    #[serde(default)]
    pub twilio: Option<TwilioFileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwilioFileConfig {
    #[serde(default)]
    pub api_base: Option<String>,
}

/// Parse a 24h `HH:MM` send time.
pub fn parse_send_time(value: &str) -> Result<NaiveTime, VocabError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| VocabError::InvalidSendTime(value.to_string()))
}
