//! Store configuration.

use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Top-level storefront configuration.
///
/// ```toml
/// [cart]
/// currency = "usd"
///
/// [catalog]
/// per_page = 12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,
    /// Catalog listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StoreConfig {
    /// Parse configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no cart or listing can work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.catalog.per_page < 1 {
            return Err(CommerceError::ConfigError(
                "catalog.per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Cart settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Currency every line item must be priced in. The code is matched
    /// case-insensitively.
    #[serde(default)]
    pub currency: Currency,
}

/// Catalog listing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per listing page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// How many related products a detail page shows.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_per_page() -> usize {
    8
}

fn default_related_limit() -> usize {
    4
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            related_limit: default_related_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.cart.currency, Currency::USD);
        assert_eq!(config.catalog.per_page, 8);
        assert_eq!(config.catalog.related_limit, 4);
    }

    #[test]
    fn test_partial_document() {
        let config = StoreConfig::from_toml_str(
            r#"
            [cart]
            currency = "zar"

            [catalog]
            per_page = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.cart.currency, Currency::ZAR);
        assert_eq!(config.catalog.per_page, 12);
        assert_eq!(config.catalog.related_limit, 4);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = StoreConfig::from_toml_str("[cart]\ncurrency = \"XYZ\"").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));

        let err = StoreConfig::from_toml_str("[catalog]\nper_page = 0").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StoreConfig::from_toml_str("[cart").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }
}
