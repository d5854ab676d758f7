// Configuration loader
// Defaults, then ~/.wordcapsule/config.toml (or --config), then CLI overrides

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::constants::{CI_ENV_VARS, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::{parse_send_time, Config, FileConfig};

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vocab_file: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
    pub send_time: Option<String>,
}

/// Load configuration from an explicit file, or the default location if it exists.
pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let file = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file {} does not exist", path.display());
            }
            Some(read_file_config(path)?)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => Some(read_file_config(&path)?),
            _ => None,
        },
    };

    let mut config = Config::default();
    if let Some(file) = file {
        config = apply_file_config(config, file)?;
    }
    apply_overrides(config, overrides)
}

/// `~/.wordcapsule/config.toml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    debug!("Reading configuration from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))
}

pub fn apply_file_config(mut config: Config, file: FileConfig) -> Result<Config> {
    if let Some(path) = file.vocab_file {
        config.vocab_file = path;
    }
    if let Some(path) = file.history_file {
        config.history_file = path;
    }
    if let Some(path) = file.delivery_log {
        config.delivery_log = Some(path);
    }
    if file.delivery_log_enabled == Some(false) {
        config.delivery_log = None;
    }
    if let Some(time) = file.send_time {
        config.send_time = parse_send_time(&time).context("Invalid send_time in config file")?;
    }
    if let Some(secs) = file.poll_interval_secs {
        if secs == 0 {
            bail!("poll_interval_secs must be greater than zero");
        }
        config.poll_interval = Duration::from_secs(secs);
    }
    if let Some(api_base) = file.twilio.and_then(|t| t.api_base) {
        config.twilio_api_base = api_base;
    }
    Ok(config)
}

pub fn apply_overrides(mut config: Config, overrides: &ConfigOverrides) -> Result<Config> {
    if let Some(path) = &overrides.vocab_file {
        config.vocab_file = path.clone();
    }
    if let Some(path) = &overrides.history_file {
        config.history_file = path.clone();
    }
    if let Some(time) = &overrides.send_time {
        config.send_time = parse_send_time(time).context("Invalid --time value")?;
    }
    Ok(config)
}

/// Whether the process runs in a CI / one-shot environment.
pub fn is_ci_environment() -> bool {
    ci_from_lookup(|key| std::env::var(key).ok())
}

pub fn ci_from_lookup<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_ENV_VARS.iter().any(|key| {
        lookup(key).is_some_and(|value| {
            let value = value.trim().to_ascii_lowercase();
            !value.is_empty() && value != "false" && value != "0"
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn parse(toml_str: &str) -> FileConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_file_config_overrides_defaults() {
        let file = parse(
            r#"
vocab_file = "/data/words.txt"
send_time = "19:30"
poll_interval_secs = 15

[twilio]
api_base = "http://localhost:9000"
"#,
        );
        let config = apply_file_config(Config::default(), file).unwrap();
        assert_eq!(config.vocab_file, PathBuf::from("/data/words.txt"));
        assert_eq!(config.history_file, PathBuf::from("vocab_history.json"));
        assert_eq!(config.send_time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert_eq!(config.poll_interval, Duration::from_secs(15));
        assert_eq!(config.twilio_api_base, "http://localhost:9000");
    }

    #[test]
    fn test_delivery_log_can_be_disabled() {
        let file = parse("delivery_log_enabled = false\n");
        let config = apply_file_config(Config::default(), file).unwrap();
        assert!(config.delivery_log.is_none());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("auth_token = \"x\"\n").is_err());
    }

    #[test]
    fn test_invalid_send_time_is_an_error() {
        let file = parse("send_time = \"8 o'clock\"\n");
        assert!(apply_file_config(Config::default(), file).is_err());
    }

    #[test]
    fn test_zero_poll_interval_is_an_error() {
        let file = parse("poll_interval_secs = 0\n");
        assert!(apply_file_config(Config::default(), file).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let overrides = ConfigOverrides {
            vocab_file: Some(PathBuf::from("mine.txt")),
            history_file: None,
            send_time: Some("06:15".to_string()),
        };
        let config = apply_overrides(Config::default(), &overrides).unwrap();
        assert_eq!(config.vocab_file, PathBuf::from("mine.txt"));
        assert_eq!(config.send_time, NaiveTime::from_hms_opt(6, 15, 0).unwrap());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), &ConfigOverrides::default()).is_err());
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_file = \"h.json\"\n").unwrap();
        let config = load_config(Some(&path), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.history_file, PathBuf::from("h.json"));
    }

    #[test]
    fn test_ci_detection() {
        assert!(ci_from_lookup(|k| (k == "CI").then(|| "true".to_string())));
        assert!(ci_from_lookup(|k| (k == "GITHUB_ACTIONS").then(|| "1".to_string())));
        assert!(!ci_from_lookup(|k| (k == "CI").then(|| "false".to_string())));
        assert!(!ci_from_lookup(|_| None));
    }
}
