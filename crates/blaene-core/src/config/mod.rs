//! Site configuration
//!
//! Configuration comes from an optional YAML file, then the `PORT`
//! environment variable, then whatever the binary applies from its command
//! line. Every field has a default so an empty file is a valid configuration.

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::*;
pub use types::*;


use crate::errors::SiteError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig, SiteError> {
    ConfigLoader::from_file(path).await
}

/// Validate a configuration
pub fn validate_config(config: &SiteConfig) -> Result<(), SiteError> {
    config.validate()
}
