use crate::catalog::PriceFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static hosting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_true")]
    pub enable_cors: bool,
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

/// Catalog filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Length of the fade-out before a hidden entry leaves the layout
    #[serde(default = "default_hide_transition_ms")]
    pub hide_transition_ms: u64,
    /// Quiet period applied to slider input, 0 applies every input at once
    #[serde(default)]
    pub slider_debounce_ms: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_navbar_scroll_threshold")]
    pub navbar_scroll_threshold: f64,
    #[serde(default = "default_contact_reset_ms")]
    pub contact_reset_ms: u64,
    #[serde(default = "default_viewer_tick_ms")]
    pub viewer_tick_ms: u64,
    #[serde(default = "default_row_removal_ms")]
    pub row_removal_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ServerSettings {
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CatalogSettings {
    pub fn hide_transition(&self) -> Duration {
        Duration::from_millis(self.hide_transition_ms)
    }

    pub fn slider_debounce(&self) -> Duration {
        Duration::from_millis(self.slider_debounce_ms)
    }

    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(
            self.currency_symbol.clone(),
            self.group_separator,
            self.decimal_separator,
        )
    }
}

impl UiSettings {
    pub fn contact_reset(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }

    pub fn viewer_tick(&self) -> Duration {
        Duration::from_millis(self.viewer_tick_ms)
    }

    pub fn row_removal(&self) -> Duration {
        Duration::from_millis(self.row_removal_ms)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_true() -> bool {
    true
}

fn default_hide_transition_ms() -> u64 {
    300
}

fn default_currency_symbol() -> String {
    "₺".to_string()
}

fn default_group_separator() -> char {
    '.'
}

fn default_decimal_separator() -> char {
    ','
}

fn default_navbar_scroll_threshold() -> f64 {
    50.0
}

fn default_contact_reset_ms() -> u64 {
    3000
}

fn default_viewer_tick_ms() -> u64 {
    50
}

fn default_row_removal_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root: default_root(),
            index_file: default_index_file(),
            enable_cors: true,
            enable_logging: true,
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            hide_transition_ms: default_hide_transition_ms(),
            slider_debounce_ms: 0,
            currency_symbol: default_currency_symbol(),
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: default_navbar_scroll_threshold(),
            contact_reset_ms: default_contact_reset_ms(),
            viewer_tick_ms: default_viewer_tick_ms(),
            row_removal_ms: default_row_removal_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
