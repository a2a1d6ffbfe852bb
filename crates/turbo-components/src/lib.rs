//! Leptos storefront components for TurboCommerce product pages.
//!
//! The main entry point is [`ProductActions`](components::ProductActions):
//! option pickers, the current price and an add-to-cart button for one
//! product, all bound to a selection context scoped to that product.
//!
//! ```rust,ignore
//! use turbo_components::prelude::*;
//!
//! #[component]
//! fn ProductPage(product: Product) -> impl IntoView {
//!     view! {
//!         <CartProvider>
//!             <ProductActions
//!                 product=product
//!                 on_variant_change=|variant: Option<ProductVariant>| {
//!                     leptos::logging::log!("variant: {:?}", variant.map(|v| v.id));
//!                 }
//!             />
//!         </CartProvider>
//!     }
//! }
//! ```
//!
//! ## Crate Features
//!
//! - `ssr` - Server-side rendering
//! - `hydrate` - Client-side hydration
//! - `csr` - Client-side rendering only

pub mod components;
pub mod config;
pub mod context;
pub mod price;
pub mod variant_change;

pub use config::StorefrontConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use leptos::prelude::*;
    pub use turbo_commerce::prelude::*;

    pub use crate::components::{
        ActionButtonState, Button, ButtonVariant, Divider, OptionSelect, ProductActions,
        ProductActionsInner,
    };
    pub use crate::config::{provide_storefront_config, use_storefront_config, StorefrontConfig};
    pub use crate::context::{
        use_cart, use_product_actions, CartContext, CartProvider, ProductActionsContext,
        ProductProvider,
    };
    pub use crate::price::{use_product_price, use_selected_price};
    pub use crate::variant_change::VariantChangeNotifier;
}
