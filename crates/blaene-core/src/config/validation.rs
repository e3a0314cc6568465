//! Configuration validation

use crate::config::types::*;
use crate::errors::SiteError;

impl SiteConfig {
    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), SiteError> {
        self.server.validate()?;
        self.catalog.validate()?;
        self.ui.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerSettings {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.host.trim().is_empty() {
            return Err(SiteError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }

        if self.index_file.trim().is_empty() {
            return Err(SiteError::ValidationError(
                "server.index_file cannot be empty".to_string(),
            ));
        }

        if self.index_file.contains('/') || self.index_file.contains('\\') {
            return Err(SiteError::ValidationError(format!(
                "server.index_file must be a file name inside the root, got '{}'",
                self.index_file
            )));
        }

        Ok(())
    }
}

impl CatalogSettings {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.hide_transition_ms == 0 {
            return Err(SiteError::ValidationError(
                "catalog.hide_transition_ms must be greater than 0".to_string(),
            ));
        }

        if self.group_separator == self.decimal_separator {
            return Err(SiteError::ValidationError(format!(
                "catalog.group_separator and catalog.decimal_separator must differ (both '{}')",
                self.group_separator
            )));
        }

        if self.group_separator.is_ascii_digit() || self.decimal_separator.is_ascii_digit() {
            return Err(SiteError::ValidationError(
                "catalog separators cannot be digits".to_string(),
            ));
        }

        Ok(())
    }
}

impl UiSettings {
    pub fn validate(&self) -> Result<(), SiteError> {
        if !self.navbar_scroll_threshold.is_finite() || self.navbar_scroll_threshold < 0.0 {
            return Err(SiteError::ValidationError(
                "ui.navbar_scroll_threshold must be a non-negative number".to_string(),
            ));
        }

        for (name, value) in [
            ("ui.contact_reset_ms", self.contact_reset_ms),
            ("ui.viewer_tick_ms", self.viewer_tick_ms),
            ("ui.row_removal_ms", self.row_removal_ms),
        ] {
            if value == 0 {
                return Err(SiteError::ValidationError(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), SiteError> {
        match self.level.to_lowercase().as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(SiteError::ValidationError(format!(
                "Unknown logging.level '{}'",
                other
            ))),
        }
    }
}
