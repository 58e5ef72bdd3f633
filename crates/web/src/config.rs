//! Admin configuration via `admin.toml`
//!
//! Settings for the default locale and time hooks. A missing section or key
//! falls back to its default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use adminkit_core::{Error, Result};

/// Config file name placed in the host's config directory.
pub const CONFIG_FILE_NAME: &str = "admin.toml";

/// Where the default locale resolver looks for a locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    /// Request header checked first (default: `"Locale"`)
    pub header: String,
    /// Query parameter checked second (default: `"locale"`)
    pub query_param: String,
    /// Cookie checked last, and written when the locale comes from the query
    /// (default: `"locale"`)
    pub cookie: String,
    /// Lifetime of the written locale cookie in days (default: 365)
    pub cookie_ttl_days: u32,
    /// Locale returned when nothing matches (default: empty)
    pub default_locale: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        LocaleConfig {
            header: "Locale".to_string(),
            query_param: "locale".to_string(),
            cookie: "locale".to_string(),
            cookie_ttl_days: 365,
            default_locale: String::new(),
        }
    }
}

/// Time formatting defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeConfig {
    /// strftime format used when a caller passes an empty format
    pub format: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

/// Admin configuration loaded from `admin.toml`.
///
/// # Example
///
/// ```toml
/// [locale]
/// header = "Locale"
/// query_param = "locale"
/// cookie = "locale"
/// cookie_ttl_days = 365
/// default_locale = "en-US"
///
/// [time]
/// format = "%Y-%m-%d %H:%M"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminConfig {
    /// Locale resolution settings
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Time formatting settings
    #[serde(default)]
    pub time: TimeConfig,
}

impl AdminConfig {
    /// Check that every lookup name and the time format are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("locale.header", &self.locale.header),
            ("locale.query_param", &self.locale.query_param),
            ("locale.cookie", &self.locale.cookie),
            ("time.format", &self.time.format),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Admin configuration

[locale]
# Request header checked first
header = "Locale"
# Query parameter checked second; a match is remembered in the cookie below
query_param = "locale"
# Cookie checked last
cookie = "locale"
# Lifetime of the remembered locale cookie
cookie_ttl_days = 365
# Returned when no header, parameter or cookie carries a locale
default_locale = ""

[time]
# strftime format used when no explicit format is given
format = "%Y-%m-%d %H:%M"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: AdminConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        debug!(target: "adminkit::config", path = %path.display(), "Loaded admin config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!(target: "adminkit::config", path = %path.display(), "Wrote default admin config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
