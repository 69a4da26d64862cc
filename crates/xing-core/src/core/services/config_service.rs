//! Configuration service for managing application configuration

use crate::AppError;
use crate::api::client::XingClient;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::storage::credentials::OAuthCredentials;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get effective base URL
    pub fn get_base_url(&self) -> String {
        self.config.get_base_url()
    }

    /// Set base URL after validating it
    pub fn set_base_url(&mut self, url: String) -> Result<(), AppError> {
        validate_url(&url)?;
        self.config.set_base_url(url);
        Ok(())
    }

    pub fn set_consumer_key(&mut self, key: String) {
        self.config.consumer_key = Some(key).filter(|k| !k.is_empty());
    }

    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<(), AppError> {
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                value: secs.to_string(),
                reason: "timeout must be at least one second".to_string(),
            }
            .into());
        }
        self.config.timeout_secs = Some(secs);
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }

    /// Build a transport from the configuration and the environment credentials
    pub fn build_client(&self) -> Result<XingClient, AppError> {
        let mut client =
            XingClient::with_timeout(self.get_base_url(), self.config.get_timeout_secs())?;
        let credentials = OAuthCredentials::from_env(self.config.consumer_key.as_deref())?;
        client.set_credentials(credentials);
        Ok(client)
    }
}
