//! Configuration module for the xendit CLI.
//!
//! Handles loading configuration from a TOML file and the secret key
//! override taken from the command line or environment.

pub mod file;

use crate::config::file::FileConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use xendit_sdk::ClientConfig;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("no secret key: set `xendit.secret_key` or XENDIT_SECRET_KEY")]
    MissingSecretKey,

    #[error("invalid client configuration: {0}")]
    Client(#[from] xendit_sdk::ConfigError),
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    secret_key_override: Option<String>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, secret_key_override: Option<String>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            secret_key_override,
        }
    }

    /// Load the configuration and build the SDK client settings.
    ///
    /// A missing config file is not an error as long as the secret key is
    /// supplied some other way.
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let file_config = if self.config_path.exists() {
            let config_content = std::fs::read_to_string(&self.config_path)?;
            toml::from_str(&config_content)?
        } else {
            tracing::debug!(
                "config file {:?} not found, using defaults",
                self.config_path
            );
            FileConfig {
                xendit: Default::default(),
            }
        };

        self.build_client_config(file_config)
    }

    fn build_client_config(&self, file_config: FileConfig) -> Result<ClientConfig, ConfigError> {
        let xendit = file_config.xendit;
        let secret_key = self
            .secret_key_override
            .clone()
            .or(xendit.secret_key)
            .ok_or(ConfigError::MissingSecretKey)?;

        let mut config = ClientConfig::new(secret_key)?.with_base_url(xendit.base_url);
        if let Some(secs) = xendit.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
