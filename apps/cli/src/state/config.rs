//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`)
//! 2. Environment variables (`PRINTQUOTE_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock needed.

use std::path::PathBuf;

use printquote_core::money::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the currency code.
pub const ENV_CURRENCY_CODE: &str = "PRINTQUOTE_CURRENCY_CODE";
/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "PRINTQUOTE_CURRENCY_SYMBOL";
/// Environment variable pointing at a JSON catalog seed.
pub const ENV_CATALOG_PATH: &str = "PRINTQUOTE_CATALOG";

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency code (ISO 4217), display only
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// JSON catalog seed read once at session start.
    /// `None` uses the shipped price table.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: EUR (€)
    /// - Catalog: shipped defaults
    fn default() -> Self {
        ConfigState {
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PRINTQUOTE_CURRENCY_CODE`: Override currency code
    /// - `PRINTQUOTE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PRINTQUOTE_CATALOG`: Path to a JSON catalog seed
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(code) = lookup(ENV_CURRENCY_CODE).filter(|v| !v.trim().is_empty()) {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup(ENV_CATALOG_PATH).filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats an already-rounded amount with the session currency symbol.
    pub fn format_currency(&self, amount: Decimal) -> String {
        format_amount(&self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[]));
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.currency_symbol, "€");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_CURRENCY_CODE, "USD"),
            (ENV_CURRENCY_SYMBOL, "$"),
            (ENV_CATALOG_PATH, "/etc/printquote/catalog.json"),
        ]));
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/printquote/catalog.json"))
        );
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[(ENV_CATALOG_PATH, "  ")]));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(dec!(811.80)), "€811.80");
        assert_eq!(config.format_currency(dec!(-12.34)), "-€12.34");
    }
}
