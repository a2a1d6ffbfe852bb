//! Reactive contexts shared by product page components.

mod cart;
mod product;

pub use cart::{use_cart, CartContext, CartProvider};
pub use product::{use_product_actions, ProductActionsContext, ProductProvider};
