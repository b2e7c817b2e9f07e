use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

use crate::source::{LoadOptions, DEFAULT_DATA_PATH};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "movierate.toml";

pub const ENV_DATA_PATH: &str = "MOVIERATE_DATA";
pub const ENV_LOG_LEVEL: &str = "MOVIERATE_LOG_LEVEL";
pub const ENV_STRICT: &str = "MOVIERATE_STRICT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rating file to load
    pub data_path: PathBuf,
    /// Tracing filter used when no `-v` flag is given
    pub log_level: Option<String>,
    /// Number of movies listed by `top-rated` when no amount is given
    pub default_amount: usize,
    /// Reject the whole file on the first malformed record
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: Some("info".to_string()),
            default_amount: 10,
            strict: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an environment lookup
    pub fn merge_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_path) = lookup(ENV_DATA_PATH) {
            self.data_path = PathBuf::from(data_path);
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(log_level);
        }

        if let Some(strict) = lookup(ENV_STRICT) {
            if let Ok(value) = strict.parse::<bool>() {
                self.strict = value;
            }
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
        }
    }
}
