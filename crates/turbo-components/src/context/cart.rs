//! Cart context.

use leptos::prelude::*;
use turbo_commerce::cart::Cart;

/// Reactive handle to the shopper's cart.
#[derive(Debug, Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
}

impl CartContext {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: RwSignal::new(cart),
        }
    }

    /// Total quantity in the cart.
    pub fn item_count(&self) -> i64 {
        self.cart.with(Cart::item_count)
    }
}

/// Provides a cart to every product component below it.
#[component]
pub fn CartProvider(
    /// Starting cart; an empty one when omitted.
    #[prop(optional)]
    cart: Option<Cart>,
    children: Children,
) -> impl IntoView {
    provide_context(CartContext::new(cart.unwrap_or_default()));
    children()
}

/// The nearest provided cart, if any.
pub fn use_cart() -> Option<CartContext> {
    use_context::<CartContext>()
}
