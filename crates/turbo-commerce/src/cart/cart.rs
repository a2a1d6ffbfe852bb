//! Cart and line item types.

use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency,
        }
    }

    /// Add an item to the cart.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The price is in another currency than the cart
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    /// - Arithmetic overflow would occur
    pub fn add_item(
        &mut self,
        variant_id: VariantId,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.variant_id == variant_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(variant_id, product_id, product_name, quantity, unit_price)?;
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Add a catalog variant, checking it belongs to the product and has stock.
    pub fn add_variant(
        &mut self,
        product: &Product,
        variant: &ProductVariant,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if variant.product_id != product.id {
            return Err(CommerceError::VariantNotFound(variant.id.to_string()));
        }

        let already_in_cart = self
            .get_item_by_variant(&variant.id)
            .map(|i| i.quantity)
            .unwrap_or(0);
        let requested = already_in_cart.saturating_add(quantity);
        if !variant.inventory.can_fulfill(requested) {
            tracing::debug!(
                variant_id = %variant.id,
                requested,
                available = variant.inventory.available(),
                "variant cannot cover requested quantity"
            );
            return Err(CommerceError::InsufficientInventory {
                variant_id: variant.id.to_string(),
                requested,
                available: variant.inventory.available(),
            });
        }

        let id = self.add_item(
            variant.id.clone(),
            product.id.clone(),
            product.title.clone(),
            quantity,
            variant.price,
        )?;
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.variant_name = Some(variant.display_title());
        }
        Ok(id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by variant ID.
    pub fn get_item_by_variant(&self, variant_id: &VariantId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.variant_id == variant_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Variant being purchased.
    pub variant_id: VariantId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Variant name (e.g., "Large / Blue").
    pub variant_name: Option<String>,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        variant_id: VariantId,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, CommerceError> {
        let total_price = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            id: LineItemId::generate(),
            variant_id,
            product_id,
            product_name: product_name.into(),
            variant_name: None,
            quantity,
            unit_price,
            total_price,
        })
    }

    /// Update the total price based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}
