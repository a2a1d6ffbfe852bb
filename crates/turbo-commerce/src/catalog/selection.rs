//! Option selection and variant resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductVariant};
use crate::ids::OptionId;

/// The value a shopper has chosen for each product option.
///
/// Options without an entry are unset. A variant is resolved only once every
/// product option has a value and some variant carries exactly those values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSelection {
    values: HashMap<OptionId, String>,
}

impl OptionSelection {
    /// An empty selection (every option unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection matching the option values of a variant.
    pub fn from_variant(variant: &ProductVariant) -> Self {
        Self {
            values: variant
                .options
                .iter()
                .map(|o| (o.option_id.clone(), o.value.clone()))
                .collect(),
        }
    }

    /// Initial selection for a product.
    ///
    /// Single-variant products start with their only variant selected.
    pub fn initial_for(product: &Product) -> Self {
        match product.variants.as_slice() {
            [only] => Self::from_variant(only),
            _ => Self::new(),
        }
    }

    /// Current value for an option.
    pub fn get(&self, option_id: &OptionId) -> Option<&str> {
        self.values.get(option_id).map(String::as_str)
    }

    /// Set the value for an option, replacing any previous value.
    pub fn set(&mut self, option_id: OptionId, value: impl Into<String>) {
        self.values.insert(option_id, value.into());
    }

    /// Whether every option of the product has a value.
    pub fn is_complete(&self, product: &Product) -> bool {
        product
            .options
            .iter()
            .all(|option| self.values.contains_key(&option.id))
    }

    /// Whether the variant carries the selected value for every product option.
    pub fn matches(&self, product: &Product, variant: &ProductVariant) -> bool {
        product.options.iter().all(|option| {
            match (self.get(&option.id), variant.option_value(&option.id)) {
                (Some(selected), Some(value)) => selected == value,
                _ => false,
            }
        })
    }

    /// The variant matching this selection, if the selection is complete.
    pub fn resolve<'a>(&self, product: &'a Product) -> Option<&'a ProductVariant> {
        if !self.is_complete(product) {
            return None;
        }
        product
            .variants
            .iter()
            .find(|variant| self.matches(product, variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn shirt() -> Product {
        let mut product = Product::new("Shirt", "shirt");
        product.options.push(
            crate::catalog::ProductOption::new("Size", ["S", "M"]).with_id("size"),
        );
        product.options.push(
            crate::catalog::ProductOption::new("Color", ["Red", "Blue"]).with_id("color"),
        );
        for (size, color) in [("S", "Red"), ("M", "Red"), ("M", "Blue")] {
            product.add_variant(
                ProductVariant::new(
                    ProductId::new("shirt"),
                    format!("SHIRT-{size}-{color}"),
                    Money::new(2500, Currency::USD),
                )
                .with_option("size", size)
                .with_option("color", color),
            );
        }
        product
    }

    #[test]
    fn test_partial_selection_resolves_nothing() {
        let product = shirt();
        let mut selection = OptionSelection::new();
        selection.set(OptionId::new("size"), "M");

        assert!(!selection.is_complete(&product));
        assert!(selection.resolve(&product).is_none());
    }

    #[test]
    fn test_full_selection_resolves_variant() {
        let product = shirt();
        let mut selection = OptionSelection::new();
        selection.set(OptionId::new("size"), "M");
        selection.set(OptionId::new("color"), "Blue");

        let variant = selection.resolve(&product).unwrap();
        assert_eq!(variant.sku, "SHIRT-M-Blue");
    }

    #[test]
    fn test_unavailable_combination_resolves_nothing() {
        let product = shirt();
        let mut selection = OptionSelection::new();
        selection.set(OptionId::new("size"), "S");
        selection.set(OptionId::new("color"), "Blue");

        assert!(selection.is_complete(&product));
        assert!(selection.resolve(&product).is_none());
    }

    #[test]
    fn test_changing_a_value_replaces_it() {
        let product = shirt();
        let mut selection = OptionSelection::new();
        selection.set(OptionId::new("size"), "S");
        selection.set(OptionId::new("color"), "Red");
        selection.set(OptionId::new("size"), "M");

        assert_eq!(selection.get(&OptionId::new("size")), Some("M"));
        assert_eq!(selection.resolve(&product).unwrap().sku, "SHIRT-M-Red");
    }

    #[test]
    fn test_single_variant_product_starts_selected() {
        let mut product = Product::new("Mug", "mug");
        product.options.push(crate::catalog::ProductOption::new("Style", ["Classic"]).with_id("style"));
        product.add_variant(
            ProductVariant::new(ProductId::new("mug"), "MUG", Money::new(900, Currency::USD))
                .with_option("style", "Classic"),
        );

        let selection = OptionSelection::initial_for(&product);
        assert_eq!(selection.get(&OptionId::new("style")), Some("Classic"));
        assert_eq!(selection.resolve(&product).unwrap().sku, "MUG");
    }

    #[test]
    fn test_multi_variant_product_starts_empty() {
        let selection = OptionSelection::initial_for(&shirt());
        assert_eq!(selection, OptionSelection::new());
    }
}
