//! Error types for configuration and start-up failures
//!
//! The storefront behaviors themselves never fail: malformed page data is
//! coerced and missing controls turn features off. Errors only surface while
//! loading and validating the site configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for SiteError {
    fn from(err: serde_yaml::Error) -> Self {
        SiteError::ConfigError(format!("Failed to parse YAML config: {}", err))
    }
}
