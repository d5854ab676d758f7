// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{
    apply_file_config, apply_overrides, ci_from_lookup, default_config_path, is_ci_environment,
    load_config, ConfigOverrides,
};
pub use settings::{parse_send_time, Config, FileConfig, TwilioFileConfig};
