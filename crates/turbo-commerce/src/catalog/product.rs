//! Product, option and variant types.

use crate::catalog::InventoryLevel;
use crate::ids::{OptionId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog, together with its purchasable variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL-friendly handle (unique).
    pub handle: String,
    /// Configurable options (e.g., Size, Color).
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Purchasable variants, one per option combination.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a new product with no options or variants.
    pub fn new(title: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: ProductId::generate(),
            title: title.into(),
            handle: handle.into(),
            options: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Parse a product from JSON.
    pub fn from_json(json: &str) -> Result<Self, crate::CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a shopper has to pick options before buying.
    ///
    /// Single-variant products are bought as-is.
    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }

    /// Add a variant, binding it to this product.
    pub fn add_variant(&mut self, mut variant: ProductVariant) -> VariantId {
        variant.product_id = self.id.clone();
        let id = variant.id.clone();
        self.variants.push(variant);
        id
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

/// A configurable product option (e.g., Size with values S, M, L).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Unique option identifier.
    pub id: OptionId,
    /// Display title.
    pub title: String,
    /// Allowed values, in display order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl ProductOption {
    pub fn new<I, V>(title: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            id: OptionId::generate(),
            title: title.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Use a fixed ID instead of a generated one.
    pub fn with_id(mut self, id: impl Into<OptionId>) -> Self {
        self.id = id.into();
        self
    }
}

/// A product variant (e.g., a size/color combination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Stock keeping unit for this variant (unique).
    pub sku: String,
    /// Variant title (e.g., "Large / Blue").
    #[serde(default)]
    pub title: Option<String>,
    /// Current selling price.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Option values that define this variant.
    #[serde(default)]
    pub options: Vec<VariantOption>,
    /// Inventory level.
    #[serde(default)]
    pub inventory: InventoryLevel,
}

impl ProductVariant {
    /// Create a new variant.
    pub fn new(product_id: ProductId, sku: impl Into<String>, price: Money) -> Self {
        Self {
            id: VariantId::generate(),
            product_id,
            sku: sku.into(),
            title: None,
            price,
            compare_at_price: None,
            options: Vec::new(),
            inventory: InventoryLevel::untracked(),
        }
    }

    /// Set an option value (builder style).
    pub fn with_option(mut self, option_id: impl Into<OptionId>, value: impl Into<String>) -> Self {
        self.options.push(VariantOption::new(option_id, value));
        self
    }

    /// Set the inventory level (builder style).
    pub fn with_inventory(mut self, inventory: InventoryLevel) -> Self {
        self.inventory = inventory;
        self
    }

    /// Set the compare-at price (builder style).
    pub fn with_compare_at_price(mut self, price: Money) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Value this variant has for the given option.
    pub fn option_value(&self, option_id: &OptionId) -> Option<&str> {
        self.options
            .iter()
            .find(|o| &o.option_id == option_id)
            .map(|o| o.value.as_str())
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.inventory.is_available()
    }

    /// Check if this variant is on sale (compare-at price above price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.currency == self.price.currency && cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Display title, falling back to the joined option values.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        if self.options.is_empty() {
            "Default".to_string()
        } else {
            self.options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }
}

/// A variant's value for one product option (e.g., size = Large).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantOption {
    /// Option this value belongs to.
    pub option_id: OptionId,
    /// Option value (e.g., "Large", "Blue").
    pub value: String,
}

impl VariantOption {
    pub fn new(option_id: impl Into<OptionId>, value: impl Into<String>) -> Self {
        Self {
            option_id: option_id.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("Test Product", "test-product");
        assert_eq!(product.title, "Test Product");
        assert!(product.options.is_empty());
        assert!(!product.has_multiple_variants());
    }

    #[test]
    fn test_add_variant_binds_product_id() {
        let mut product = Product::new("Tee", "tee");
        let id = product.add_variant(ProductVariant::new(
            ProductId::new("other"),
            "TEE-S",
            usd(1500),
        ));

        let variant = product.variant(&id).unwrap();
        assert_eq!(variant.product_id, product.id);
    }

    #[test]
    fn test_has_multiple_variants() {
        let mut product = Product::new("Tee", "tee");
        product.add_variant(ProductVariant::new(product.id.clone(), "TEE-S", usd(1500)));
        assert!(!product.has_multiple_variants());

        product.add_variant(ProductVariant::new(product.id.clone(), "TEE-M", usd(1500)));
        assert!(product.has_multiple_variants());
    }

    #[test]
    fn test_variant_on_sale() {
        let variant = ProductVariant::new(ProductId::generate(), "SKU-001", usd(2000))
            .with_compare_at_price(usd(3000));
        assert!(variant.is_on_sale());

        let variant = ProductVariant::new(ProductId::generate(), "SKU-002", usd(2000))
            .with_compare_at_price(usd(2000));
        assert!(!variant.is_on_sale());
    }

    #[test]
    fn test_variant_options() {
        let variant = ProductVariant::new(ProductId::generate(), "SKU-001-L-BL", usd(2999))
            .with_option("size", "Large")
            .with_option("color", "Blue");

        assert_eq!(variant.option_value(&OptionId::new("size")), Some("Large"));
        assert_eq!(variant.option_value(&OptionId::new("material")), None);
        assert_eq!(variant.display_title(), "Large / Blue");
    }

    #[test]
    fn test_product_from_json() {
        let json = r#"{
            "id": "prod_tee",
            "title": "Tee",
            "handle": "tee",
            "options": [{ "id": "opt_size", "title": "Size", "values": ["S", "M"] }],
            "variants": [{
                "id": "var_s",
                "product_id": "prod_tee",
                "sku": "TEE-S",
                "price": { "amount_cents": 1500, "currency": "USD" },
                "options": [{ "option_id": "opt_size", "value": "S" }]
            }]
        }"#;

        let product = Product::from_json(json).unwrap();
        assert_eq!(product.options[0].title, "Size");
        assert_eq!(product.variants[0].option_value(&OptionId::new("opt_size")), Some("S"));
        // Missing inventory means stock is not tracked
        assert!(product.variants[0].is_in_stock());
    }
}
