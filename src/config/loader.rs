//! Configuration file loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default backend address (Coqui TTS server port).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5002";

/// Default base sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.75;

const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Run configuration, loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Model identifier understood by the backend.
    pub tts_model: String,

    #[serde(default)]
    pub use_cuda: bool,

    /// Base seed; variation `i` uses `seed + i`.
    #[serde(default)]
    pub seed: Option<i64>,

    /// Base temperature; variation `i` uses `temperature + 0.1 * i`.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_input_folder")]
    pub input_folder: PathBuf,

    #[serde(default = "default_output_folder")]
    pub output_folder: PathBuf,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_input_folder() -> PathBuf {
    PathBuf::from("inputs")
}

fn default_output_folder() -> PathBuf {
    PathBuf::from("outputs")
}

impl Config {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate config JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tts_model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "tts_model cannot be empty".to_string(),
            ));
        }

        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "temperature must be a positive number, got {}",
                self.temperature
            )));
        }

        Ok(())
    }
}

/// Pick the config file to load.
///
/// An explicit path always wins. Otherwise `./config.json` is used when it
/// exists, falling back to `<config dir>/tts-variations/config.json`.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    user_config_path().unwrap_or(local)
}

/// Per-user config location, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tts-variations").join(CONFIG_FILE_NAME))
}
