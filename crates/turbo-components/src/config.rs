//! Storefront configuration shared by the product components.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for storefront product components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Storefront name.
    pub name: String,
    /// Quantity preselected for a purchase.
    pub default_quantity: i64,
    /// Largest quantity a single purchase may add.
    pub max_quantity: i64,
    /// CSS class highlighting sale prices.
    pub sale_accent_class: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "TurboStore".to_string(),
            default_quantity: 1,
            max_quantity: 10,
            sale_accent_class: "text-rose-600".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given storefront name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the preselected quantity (at least 1).
    pub fn with_default_quantity(mut self, quantity: i64) -> Self {
        self.default_quantity = quantity.max(1);
        self
    }

    /// Set the per-purchase quantity ceiling (at least 1).
    pub fn with_max_quantity(mut self, quantity: i64) -> Self {
        self.max_quantity = quantity.max(1);
        self
    }

    /// Set the sale price accent class.
    pub fn with_sale_accent_class(mut self, class: impl Into<String>) -> Self {
        self.sale_accent_class = class.into();
        self
    }

    /// Default quantity clamped into `1..=max_quantity`.
    pub fn initial_quantity(&self) -> i64 {
        self.default_quantity.clamp(1, self.max_quantity.max(1))
    }
}

/// Make a configuration available to descendant components.
pub fn provide_storefront_config(config: StorefrontConfig) {
    provide_context(config);
}

/// The nearest provided configuration, or the default one.
pub fn use_storefront_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>().unwrap_or_default()
}
