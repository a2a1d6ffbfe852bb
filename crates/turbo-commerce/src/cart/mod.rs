//! Shopping cart module.
//!
//! Contains the cart and its line items.

mod cart;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
