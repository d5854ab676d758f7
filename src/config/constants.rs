// Project-wide constants
//
// Default paths, the schedule, and the environment variables the process reads.

/// Word list, one `word - definition` per line.
pub const DEFAULT_VOCAB_FILE: &str = "vocabs.txt";

/// Learning history written after every change.
pub const DEFAULT_HISTORY_FILE: &str = "vocab_history.json";

/// Append-only record of send attempts.
pub const DEFAULT_DELIVERY_LOG: &str = "vocab_deliveries.jsonl";

/// Local time of the daily message.
pub const DEFAULT_SEND_TIME: &str = "08:00";

/// How often the scheduler wakes up to check the clock.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Config file under the home directory.
pub const CONFIG_DIR_NAME: &str = ".wordcapsule";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const ENV_FROM_NUMBER: &str = "TWILIO_WHATSAPP_NUMBER";
pub const ENV_RECIPIENT_NUMBER: &str = "RECIPIENT_WHATSAPP_NUMBER";

/// Any of these set (and not "false"/"0") means a one-shot CI run.
pub const CI_ENV_VARS: &[&str] = &["CI", "GITHUB_ACTIONS"];
