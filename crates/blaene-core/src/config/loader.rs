//! Configuration loader for YAML files and environment resolution

use crate::config::types::*;
use crate::errors::SiteError;
use std::env;
use std::path::Path;
use tokio::fs;

/// Environment variable overriding `server.port`
pub const PORT_ENV_VAR: &str = "PORT";

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration file when one is given, otherwise start from
    /// defaults. The environment is applied in both cases.
    pub async fn load(path: Option<&Path>) -> Result<SiteConfig, SiteError> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => {
                let mut config = SiteConfig::default();
                Self::resolve_environment(&mut config)?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<SiteConfig, SiteError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            SiteError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::info!("Loaded configuration file: {}", path.display());
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<SiteConfig, SiteError> {
        let mut config: SiteConfig = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::resolve_environment(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment overrides to the configuration
    pub fn resolve_environment(config: &mut SiteConfig) -> Result<(), SiteError> {
        Self::apply_port_override(config, env::var(PORT_ENV_VAR).ok().as_deref())
    }

    /// Override the listening port from a raw value. Empty values are
    /// ignored, anything else must be a valid port number.
    pub fn apply_port_override(config: &mut SiteConfig, raw: Option<&str>) -> Result<(), SiteError> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(());
        };

        let port = raw.parse::<u16>().map_err(|e| {
            SiteError::ConfigError(format!(
                "Invalid {} value '{}': {}",
                PORT_ENV_VAR, raw, e
            ))
        })?;

        log::debug!("Port overridden from environment: {}", port);
        config.server.port = port;
        Ok(())
    }
}
