//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREADSTORE_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Toko Roti Vazakii"
//! currency_symbol = "Rp"
//! thousands_separator = "."
//!
//! [[accounts]]
//! email = "admin@breadstore.id"
//! password = "admin123"
//! role = "admin"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use breadstore_core::auth::{Account, StaticAuthenticator};
use breadstore_core::Money;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "BREADSTORE_CONFIG";

const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration.
///
/// ## Fields
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConfigState {
    /// Store name (shown on the welcome screen and order summaries)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Digit group separator ('.' for Indonesian formatting)
    pub thousands_separator: char,

    /// Login accounts for the static authenticator.
    /// Never serialized back out.
    #[serde(skip_serializing)]
    pub accounts: Vec<Account>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Toko Roti Vazakii"
    /// - Currency: IDR (Rp), '.' grouping
    /// - Accounts: one admin, one customer
    fn default() -> Self {
        ConfigState {
            store_name: "Toko Roti Vazakii".to_string(),
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
            accounts: StaticAuthenticator::default_accounts(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file and environment.
    ///
    /// ## Config File Location
    /// - `BREADSTORE_CONFIG` if set (must exist)
    /// - otherwise the platform config dir, e.g.
    ///   `~/.config/storefront/storefront.toml` on Linux (optional)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ConfigState::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        info!(store = %config.store_name, currency = %config.currency_code, "Configuration loaded");
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Reading config file");
        Self::from_toml_str(&text)
    }

    /// Parses configuration from TOML text; missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `BREADSTORE_*` overrides from a key lookup.
    ///
    /// ## Environment Variables
    /// - `BREADSTORE_STORE_NAME`: Override store name
    /// - `BREADSTORE_CURRENCY_SYMBOL`: Override currency symbol
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_name) = lookup("BREADSTORE_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(symbol) = lookup("BREADSTORE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
    }

    /// Builds the authenticator for the configured accounts.
    pub fn authenticator(&self) -> StaticAuthenticator {
        StaticAuthenticator::new(self.accounts.clone())
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use breadstore_core::Money;
    /// use storefront_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_rupiah(15_000)), "Rp 15.000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_grouped(&self.currency_symbol, self.thousands_separator)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("id", "breadstore", "storefront")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadstore_core::Role;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_rupiah(70_000)), "Rp 70.000");
        assert_eq!(config.format_currency(Money::from_rupiah(0)), "Rp 0");
        assert_eq!(
            config.format_currency(Money::from_rupiah(1_234_567)),
            "Rp 1.234.567"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConfigState::from_toml_str(r#"store_name = "Roti Bu Ani""#).unwrap();
        assert_eq!(config.store_name, "Roti Bu Ani");
        assert_eq!(config.currency_symbol, "Rp");
        assert_eq!(config.accounts.len(), 2);
    }

    #[test]
    fn test_toml_accounts_and_separator() {
        let text = r#"
            currency_symbol = "IDR"
            thousands_separator = ","

            [[accounts]]
            email = "kasir@breadstore.id"
            password = "kasir-01"
            role = "customer"
        "#;
        let config = ConfigState::from_toml_str(text).unwrap();
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].role, Role::Customer);
        assert_eq!(
            config.format_currency(Money::from_rupiah(25_000)),
            "IDR 25,000"
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = ConfigState::from_toml_str("store_name = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = ConfigState::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [("BREADSTORE_STORE_NAME", "Roti Malam")].into();
        let mut config = ConfigState::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Roti Malam");
        assert_eq!(config.currency_symbol, "Rp");
    }

    #[test]
    fn test_serialized_config_omits_accounts() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert!(json.get("accounts").is_none());
        assert_eq!(json["store_name"], "Toko Roti Vazakii");
    }
}
