//! Product catalog module.
//!
//! Contains types for products, options, variants, inventory and the
//! option selection used to resolve a purchasable variant.

mod inventory;
mod product;
mod selection;

pub use inventory::InventoryLevel;
pub use product::{Product, ProductOption, ProductVariant, VariantOption};
pub use selection::OptionSelection;
