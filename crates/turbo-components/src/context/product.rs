//! Product selection context.
//!
//! [`ProductProvider`] scopes the selection state of one product to the
//! components below it. Those components read it with
//! [`use_product_actions`] and mutate it only through
//! [`ProductActionsContext::update_options`] and
//! [`ProductActionsContext::add_to_cart`].

use leptos::prelude::*;
use turbo_commerce::prelude::*;

use crate::config::{use_storefront_config, StorefrontConfig};
use crate::context::use_cart;

/// Selection state of a single product.
///
/// Every field is a reactive handle, so the context is `Copy` and can be
/// moved into any number of closures.
#[derive(Clone, Copy)]
pub struct ProductActionsContext {
    /// The product being configured.
    pub product: StoredValue<Product>,
    /// Chosen value per option.
    pub options: RwSignal<OptionSelection>,
    /// Variant matching the selection, once it is complete.
    pub variant: Memo<Option<ProductVariant>>,
    /// Whether the resolved variant can be bought. True while unresolved.
    pub in_stock: Memo<bool>,
    /// Quantity the next add-to-cart will add.
    pub quantity: RwSignal<i64>,
    /// Ceiling for `quantity`: config limit, lowered by tracked stock.
    pub max_quantity: Memo<i64>,
    /// Whether `quantity` has reached `max_quantity`.
    pub max_quantity_met: Memo<bool>,
    /// Error of the last failed add-to-cart, cleared on success.
    pub last_error: RwSignal<Option<CommerceError>>,
    cart: RwSignal<Cart>,
}

impl ProductActionsContext {
    /// Build the selection state for `product`, adding to `cart`.
    pub fn new(product: Product, cart: RwSignal<Cart>, config: &StorefrontConfig) -> Self {
        let options = RwSignal::new(OptionSelection::initial_for(&product));
        let product = StoredValue::new(product);

        let variant = Memo::new(move |_| {
            options.with(|selection| product.with_value(|p| selection.resolve(p).cloned()))
        });

        let in_stock = Memo::new(move |_| {
            variant.with(|v| v.as_ref().map_or(true, ProductVariant::is_in_stock))
        });

        let ceiling = config.max_quantity.max(1);
        let max_quantity = Memo::new(move |_| {
            variant.with(|v| {
                match v.as_ref().and_then(|v| v.inventory.purchasable_limit()) {
                    Some(limit) => ceiling.min(limit.max(1)),
                    None => ceiling,
                }
            })
        });

        let quantity = RwSignal::new(config.initial_quantity());
        let max_quantity_met = Memo::new(move |_| quantity.get() >= max_quantity.get());

        Self {
            product,
            options,
            variant,
            in_stock,
            quantity,
            max_quantity,
            max_quantity_met,
            last_error: RwSignal::new(None),
            cart,
        }
    }

    /// Currently selected value for an option (tracked).
    pub fn selected_value(&self, option_id: &OptionId) -> Option<String> {
        self.options
            .with(|selection| selection.get(option_id).map(str::to_owned))
    }

    /// Choose `value` for an option.
    pub fn update_options(&self, option_id: OptionId, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(option_id = %option_id, value = %value, "option updated");
        self.options.update(|selection| selection.set(option_id, value));
    }

    /// Raise the quantity by one, up to `max_quantity`.
    pub fn increase_quantity(&self) {
        let max = self.max_quantity.get_untracked();
        self.quantity.update(|q| *q = (*q + 1).min(max));
    }

    /// Lower the quantity by one, down to 1.
    pub fn decrease_quantity(&self) {
        self.quantity.update(|q| *q = (*q - 1).max(1));
    }

    /// Add the resolved variant to the cart.
    ///
    /// Does nothing until the selection resolves a variant. Failures are
    /// logged and kept in `last_error`.
    pub fn add_to_cart(&self) {
        let Some(variant) = self.variant.get_untracked() else {
            tracing::debug!("add to cart ignored: no variant selected");
            return;
        };
        let quantity = self
            .quantity
            .get_untracked()
            .min(self.max_quantity.get_untracked());

        let result = self.product.with_value(|product| {
            self.cart
                .try_update(|cart| cart.add_variant(product, &variant, quantity))
        });

        match result {
            Some(Ok(line_item_id)) => {
                tracing::info!(
                    variant_id = %variant.id,
                    line_item_id = %line_item_id,
                    quantity,
                    "added to cart"
                );
                self.last_error.set(None);
            }
            Some(Err(err)) => {
                tracing::warn!(variant_id = %variant.id, error = %err, "add to cart failed");
                self.last_error.set(Some(err));
            }
            None => tracing::warn!(variant_id = %variant.id, "add to cart failed: cart disposed"),
        }
    }
}

/// Scopes product selection state to its children.
///
/// Adds to the cart of an enclosing [`CartProvider`](crate::context::CartProvider).
/// Without one, a cart local to this provider is created in the currency of
/// the first variant. Variants priced in any other currency then fail
/// add-to-cart with [`CommerceError::CurrencyMismatch`].
#[component]
pub fn ProductProvider(product: Product, children: Children) -> impl IntoView {
    let config = use_storefront_config();
    let cart = match use_cart() {
        Some(ctx) => ctx.cart,
        None => RwSignal::new(local_cart(&product)),
    };

    provide_context(ProductActionsContext::new(product, cart, &config));
    children()
}

/// Cart used when no `CartProvider` is in scope.
fn local_cart(product: &Product) -> Cart {
    let currency = product
        .variants
        .first()
        .map(|v| v.price.currency)
        .unwrap_or_default();
    Cart::new(currency)
}

/// The selection context of the enclosing [`ProductProvider`].
///
/// # Panics
/// Panics when called outside a `ProductProvider`.
pub fn use_product_actions() -> ProductActionsContext {
    expect_context::<ProductActionsContext>()
}
