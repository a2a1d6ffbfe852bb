//! Reactive price lookup.

use leptos::prelude::*;
use turbo_commerce::prelude::*;

use crate::context::use_product_actions;

/// Price snapshot of product `id` for the given variant.
///
/// Looks the product up in the enclosing product context. The snapshot is
/// recomputed only when the variant ID changes value.
pub fn use_product_price(id: ProductId, variant_id: Signal<Option<VariantId>>) -> Memo<PriceSnapshot> {
    let product = use_product_actions().product;
    Memo::new(move |_| {
        let variant_id = variant_id.get();
        product.with_value(|p| p.price_for(&id, variant_id.as_ref()))
    })
}

/// The price to show out of a snapshot: variant price, else cheapest price.
pub fn use_selected_price(price: Memo<PriceSnapshot>) -> Memo<Option<VariantPrice>> {
    Memo::new(move |_| price.with(|snapshot| snapshot.selected().cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::context::ProductActionsContext;

    fn product() -> Product {
        let mut product = Product::new("Cap", "cap");
        product.options.push(ProductOption::new("Color", ["Red", "Blue"]).with_id("color"));
        for (color, cents) in [("Red", 2500), ("Blue", 2000)] {
            product.add_variant(
                ProductVariant::new(product.id.clone(), format!("CAP-{color}"), Money::new(cents, Currency::USD))
                    .with_option("color", color),
            );
        }
        product
    }

    #[test]
    fn test_price_follows_variant() {
        let owner = Owner::new();
        owner.with(|| {
            let product = product();
            let id = product.id.clone();
            let ctx = ProductActionsContext::new(
                product,
                RwSignal::new(Cart::default()),
                &StorefrontConfig::default(),
            );
            provide_context(ctx);

            let variant_id = Signal::derive(move || ctx.variant.get().map(|v| v.id));
            let price = use_product_price(id, variant_id);
            let selected = use_selected_price(price);

            // Cheapest until a variant resolves
            assert_eq!(selected.get_untracked().unwrap().calculated_display(), "$20.00");

            ctx.update_options(OptionId::new("color"), "Red");
            assert_eq!(selected.get_untracked().unwrap().calculated_display(), "$25.00");
            assert!(price.get_untracked().variant_price.is_some());
        });
    }
}
