//! Price snapshots for product display.
//!
//! A [`PriceSnapshot`] holds what a product page needs to show a price: the
//! price of the selected variant, if any, and the cheapest price across all
//! variants as a fallback.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductVariant};
use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// Kind of price being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Regular list price.
    #[default]
    Default,
    /// Discounted below the compare-at price.
    Sale,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Default => "default",
            PriceType::Sale => "sale",
        }
    }
}

/// Display price for a single variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPrice {
    /// Price the shopper pays.
    pub calculated_price: Money,
    /// Price before any sale; equals `calculated_price` otherwise.
    pub original_price: Money,
    /// Whether this is a sale price.
    pub price_type: PriceType,
    /// Whole percentage saved against the original price.
    pub percentage_diff: u32,
}

impl VariantPrice {
    /// Build the display price of a variant.
    pub fn for_variant(variant: &ProductVariant) -> Self {
        match variant.compare_at_price {
            Some(original) if variant.is_on_sale() => Self {
                calculated_price: variant.price,
                original_price: original,
                price_type: PriceType::Sale,
                percentage_diff: variant.price.percentage_below(&original).unwrap_or(0),
            },
            _ => Self {
                calculated_price: variant.price,
                original_price: variant.price,
                price_type: PriceType::Default,
                percentage_diff: 0,
            },
        }
    }

    pub fn is_sale(&self) -> bool {
        self.price_type == PriceType::Sale
    }

    /// Formatted price the shopper pays (e.g., "$20.00").
    pub fn calculated_display(&self) -> String {
        self.calculated_price.display()
    }

    /// Formatted original price.
    pub fn original_display(&self) -> String {
        self.original_price.display()
    }
}

/// Prices of a product for a given variant selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Price of the selected variant.
    pub variant_price: Option<VariantPrice>,
    /// Lowest price across all variants.
    pub cheapest_price: Option<VariantPrice>,
}

impl PriceSnapshot {
    /// The price to display: the variant price, else the cheapest price.
    pub fn selected(&self) -> Option<&VariantPrice> {
        self.variant_price.as_ref().or(self.cheapest_price.as_ref())
    }
}

/// Something that can produce price snapshots by product ID.
pub trait PriceLookup {
    /// Prices of product `id` with `variant_id` selected.
    ///
    /// Unknown products yield an empty snapshot.
    fn price_for(&self, id: &ProductId, variant_id: Option<&VariantId>) -> PriceSnapshot;
}

impl PriceLookup for Product {
    fn price_for(&self, id: &ProductId, variant_id: Option<&VariantId>) -> PriceSnapshot {
        if &self.id != id {
            tracing::debug!(requested = %id, product = %self.id, "price lookup for another product");
            return PriceSnapshot::default();
        }
        product_price(self, variant_id)
    }
}

/// Compute the price snapshot of a product.
///
/// The cheapest price is taken from the variant with the lowest calculated
/// amount; ties go to the earlier variant. A variant ID that does not belong
/// to the product yields no variant price.
pub fn product_price(product: &Product, variant_id: Option<&VariantId>) -> PriceSnapshot {
    let variant_price = variant_id
        .and_then(|id| product.variant(id))
        .map(VariantPrice::for_variant);

    let cheapest_price = product
        .variants
        .iter()
        .min_by_key(|v| v.price.amount_cents)
        .map(VariantPrice::for_variant);

    PriceSnapshot {
        variant_price,
        cheapest_price,
    }
}
