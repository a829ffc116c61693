use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the source feed URL.
pub const INPUT_URL: &str = "INPUT_URL";
/// Environment variable naming the destination file path.
pub const INPUT_PATH: &str = "INPUT_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the INPUT_URL environment variable is required")]
    MissingUrl,
    #[error("the INPUT_PATH environment variable is required")]
    MissingPath,
}

/// Process inputs, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let feed_url = lookup(INPUT_URL).ok_or(ConfigError::MissingUrl)?;
        let output_path = lookup(INPUT_PATH).ok_or(ConfigError::MissingPath)?;
        Ok(Self {
            feed_url,
            output_path: PathBuf::from(output_path),
        })
    }
}
