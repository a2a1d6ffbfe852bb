//! Product purchase actions: option pickers, price and add-to-cart button.

use leptos::prelude::*;
use turbo_commerce::prelude::*;

use crate::components::{Button, ButtonVariant, Divider, OptionSelect};
use crate::config::use_storefront_config;
use crate::context::{use_product_actions, ProductProvider};
use crate::price::{use_product_price, use_selected_price};
use crate::variant_change::VariantChangeNotifier;

/// Label and enabled state of the add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButtonState {
    pub label: &'static str,
    pub disabled: bool,
}

impl ActionButtonState {
    /// Stock wins over selection: an out-of-stock variant never asks for a selection.
    pub fn new(in_stock: bool, has_variant: bool) -> Self {
        let label = if !in_stock {
            "Out of stock"
        } else if !has_variant {
            "Select variant"
        } else {
            "Add to cart"
        };
        Self {
            label,
            disabled: !in_stock || !has_variant,
        }
    }
}

/// Purchase controls for a product, bound to their own selection context.
#[component]
pub fn ProductActions(
    product: Product,
    /// Called with the resolved variant whenever it changes, including the
    /// first resolution.
    #[prop(optional, into)]
    on_variant_change: Option<Callback<Option<ProductVariant>>>,
) -> impl IntoView {
    let inner_product = product.clone();
    view! {
        <ProductProvider product=product>
            <ProductActionsInner product=inner_product on_variant_change=on_variant_change/>
        </ProductProvider>
    }
}

/// Purchase controls reading the enclosing [`ProductProvider`].
#[component]
pub fn ProductActionsInner(
    product: Product,
    #[prop(optional_no_strip)] on_variant_change: Option<Callback<Option<ProductVariant>>>,
) -> impl IntoView {
    let ctx = use_product_actions();
    let config = use_storefront_config();

    if let Some(callback) = on_variant_change {
        Effect::new(move |notifier: Option<VariantChangeNotifier>| {
            let mut notifier = notifier.unwrap_or_default();
            let variant = ctx.variant.get();
            notifier.notify_if_changed(&variant, |v| callback.run(v));
            notifier
        });
    }

    let variant_id = Signal::derive(move || ctx.variant.with(|v| v.as_ref().map(|v| v.id.clone())));
    let price = use_product_price(product.id.clone(), variant_id);
    let selected_price = use_selected_price(price);

    let button_state = Memo::new(move |_| {
        ActionButtonState::new(ctx.in_stock.get(), ctx.variant.with(Option::is_some))
    });

    let update_option = Callback::new(move |(option_id, value): (OptionId, String)| {
        ctx.update_options(option_id, value);
    });

    let option_selectors = product.has_multiple_variants().then(|| {
        view! {
            <div class="product-options">
                {product
                    .options
                    .iter()
                    .cloned()
                    .map(|option| {
                        let option_id = option.id.clone();
                        let title = option.title.clone();
                        let current = Signal::derive(move || ctx.selected_value(&option_id));
                        view! {
                            <div class="product-option">
                                <OptionSelect
                                    option=option
                                    current=current
                                    update_option=update_option
                                    title=title
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                <Divider/>
            </div>
        }
    });

    let sale_accent_class = config.sale_accent_class;
    let price_block = move || match selected_price.get() {
        Some(price) => {
            let class = if price.is_sale() {
                format!("price-calculated {sale_accent_class}")
            } else {
                "price-calculated".to_string()
            };
            let sale_details = price.is_sale().then(|| {
                view! {
                    <p class="price-original">
                        <span class="price-original-label">"Original: "</span>
                        <span class="line-through">{price.original_display()}</span>
                    </p>
                    <span class="price-discount">{format!("-{}%", price.percentage_diff)}</span>
                }
            });
            view! {
                <div class="product-price">
                    <span class=class>{price.calculated_display()}</span>
                    {sale_details}
                </div>
            }
            .into_any()
        }
        None => view! { <div></div> }.into_any(),
    };

    view! {
        <div class="product-actions">
            <div>{option_selectors}</div>
            {price_block}
            <Button
                on_click=Callback::new(move |_| ctx.add_to_cart())
                disabled=Signal::derive(move || button_state.get().disabled)
                variant=ButtonVariant::Primary
                class="w-full"
            >
                {move || button_state.get().label}
            </Button>
        </div>
    }
}
