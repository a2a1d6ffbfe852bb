//! E-commerce domain types for TurboCommerce product pages.
//!
//! - **Catalog**: Products, options, variants, inventory, option selection
//! - **Cart**: Shopping cart with line items
//! - **Pricing**: Price snapshots for product and variant display
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_commerce::prelude::*;
//!
//! let mut selection = OptionSelection::new();
//! selection.set(OptionId::new("size"), "M");
//!
//! if let Some(variant) = selection.resolve(&product) {
//!     cart.add_variant(&product, variant, 1)?;
//! }
//!
//! let price = product.price_for(&product.id, Some(&variant_id));
//! if let Some(selected) = price.selected() {
//!     println!("{}", selected.calculated_display());
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod pricing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        InventoryLevel, OptionSelection, Product, ProductOption, ProductVariant, VariantOption,
    };

    // Cart
    pub use crate::cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};

    // Pricing
    pub use crate::pricing::{product_price, PriceLookup, PriceSnapshot, PriceType, VariantPrice};
}
