//! JSON configuration for a synthesis run.

mod loader;

pub use loader::{
    Config, ConfigError, DEFAULT_BACKEND_URL, DEFAULT_TEMPERATURE, resolve_config_path,
    user_config_path,
};
