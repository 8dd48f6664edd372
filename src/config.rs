//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for HTTP cache headers, label layout limits, display placeholders,
//! logging defaults and default paths. `AppConfig` is the root configuration
//! struct containing all settings. Every field has a default so the service
//! can start without a configuration file.

use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

use crate::label::LabelVariant;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Labels are built from per-request query data and must never be served from
// an intermediate cache. The liveness page is static.

/// Liveness page - static text
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_PRINT: &str = "no-store";

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

// =============================================================================
// Label Layout Constants
// =============================================================================

/// Number of line item rows shown before collapsing into a "+ N more items" note
pub const MAX_VISIBLE_LINE_ITEMS: usize = 5;

/// Upper bound on copies per request (default for `label.max_copies`)
pub const DEFAULT_MAX_COPIES: u32 = 50;

/// Barcode bar geometry (SVG user units)
pub const BARCODE_START_X: u32 = 10;
pub const BARCODE_BAR_Y: u32 = 5;
pub const BARCODE_BAR_HEIGHT: u32 = 30;
pub const BARCODE_BAR_GAP: u32 = 2;

/// Display format for label dates, e.g. "Oct 9, 2026"
pub const LABEL_DATE_FORMAT: &str = "%b %-d, %Y";

// =============================================================================
// Placeholders
// =============================================================================

/// Order name used when the request does not carry one
pub const DEFAULT_ORDER_NAME: &str = "Order";

/// Line item title used when neither title nor name is present
pub const DEFAULT_ITEM_TITLE: &str = "Item";

/// Customer name on branded labels when the address has no name
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Shown for a missing recipient or an empty contents list
pub const NOT_AVAILABLE: &str = "N/A";

/// Body of the root liveness endpoint
pub const LIVENESS_MESSAGE: &str = "Shipping label service is running";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bundled logo for branded labels
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

/// Environment variable that overrides `http.port`
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "shiplabel=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 3000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Which renderer serves `/print`, and its limits
    #[serde(default)]
    pub label: LabelConfig,
    /// Branding for the "thank you" label variant
    #[serde(default)]
    pub branded: BrandedConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub variant: LabelVariant,
    /// Maximum number of copies a single request may ask for (default: 50)
    #[serde(default = "LabelConfig::default_max_copies")]
    pub max_copies: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            variant: LabelVariant::default(),
            max_copies: Self::default_max_copies(),
        }
    }
}

impl LabelConfig {
    fn default_max_copies() -> u32 {
        DEFAULT_MAX_COPIES
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandedConfig {
    pub brand_name: String,
    /// Social media handle, shown with the Instagram icon
    pub handle: String,
    pub website: String,
    pub logo_path: String,
    /// Fixed display date. Falls back to today's date when unset.
    pub date: Option<String>,
}

impl Default for BrandedConfig {
    fn default() -> Self {
        Self {
            brand_name: "Shiplabel Goods".to_string(),
            handle: "@shiplabelgoods".to_string(),
            website: "shiplabel.example".to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            date: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `path` if given, otherwise from the default path when that file
    /// exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the `PORT` override, if one is set.
    pub fn apply_port_override(&mut self, port: Option<String>) -> Result<(), ConfigError> {
        if let Some(raw) = port {
            self.http.port = raw.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a valid port number, got {:?}", PORT_ENV_VAR, raw))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.label.max_copies == 0 {
            return Err(ConfigError::Validation(
                "label.max_copies must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.label.variant, LabelVariant::Generic);
        assert_eq!(config.label.max_copies, DEFAULT_MAX_COPIES);
        assert_eq!(config.branded.logo_path, DEFAULT_LOGO_PATH);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_branded_section() {
        let config = AppConfig::from_toml(
            r#"
            [label]
            variant = "branded"

            [branded]
            brand_name = "Acme"
            handle = "@acme"
            website = "acme.test"
            date = "Dec 25, 2025"
            "#,
        )
        .unwrap();
        assert_eq!(config.label.variant, LabelVariant::Branded);
        assert_eq!(config.branded.brand_name, "Acme");
        assert_eq!(config.branded.logo_path, DEFAULT_LOGO_PATH);
        assert_eq!(config.branded.date.as_deref(), Some("Dec 25, 2025"));
    }

    #[test]
    fn test_zero_max_copies_rejected() {
        let err = AppConfig::from_toml("[label]\nmax_copies = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = AppConfig::from_toml("[label]\nvariant = \"fancy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("8080".to_string())).unwrap();
        assert_eq!(config.http.port, 8080);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.http.port, 8080);

        let err = config.apply_port_override(Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 4000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/shiplabel.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
