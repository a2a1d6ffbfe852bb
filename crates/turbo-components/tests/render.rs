//! Server-rendered output of the product actions widget.

use leptos::tachys::view::RenderHtml;
use turbo_components::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn variant(product: &Product, size: &str, cents: i64) -> ProductVariant {
    let mut variant = ProductVariant::new(product.id.clone(), format!("TEE-{size}"), usd(cents))
        .with_option("size", size);
    variant.id = VariantId::new(format!("tee-{}", size.to_lowercase()));
    variant
}

/// Tee with sizes S, M, L.
fn sized_tee() -> Product {
    let mut product = Product::new("Tee", "tee");
    product
        .options
        .push(ProductOption::new("Size", ["S", "M", "L"]).with_id("size"));
    for (size, cents) in [("S", 2000), ("M", 2000), ("L", 2500)] {
        let variant = variant(&product, size, cents);
        product.add_variant(variant);
    }
    product
}

fn single_variant(inventory: InventoryLevel) -> Product {
    let mut product = Product::new("Mug", "mug");
    product
        .options
        .push(ProductOption::new("Size", ["One size"]).with_id("size"));
    let variant = variant(&product, "One size", 900).with_inventory(inventory);
    product.add_variant(variant);
    product
}

fn render_actions(product: Product) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ProductActions product=product/> }.to_html())
}

#[test]
fn test_single_variant_renders_no_option_selectors() {
    let html = render_actions(single_variant(InventoryLevel::untracked()));

    assert!(!html.contains("option-select"));
    assert!(html.contains("$9.00"));
    assert!(html.contains("Add to cart"));
    assert!(!html.contains("disabled"));
}

#[test]
fn test_multi_variant_renders_one_selector_per_option() {
    let html = render_actions(sized_tee());

    assert_eq!(html.matches("class=\"option-select\"").count(), 1);
    assert!(html.contains("Select Size"));
    assert_eq!(html.matches("class=\"option-value\"").count(), 3);
    assert!(html.contains("divider"));
}

#[test]
fn test_without_selection_button_asks_for_variant() {
    let html = render_actions(sized_tee());

    assert!(html.contains("Select variant"));
    assert!(html.contains("disabled"));
    // Cheapest price is shown until a variant resolves
    assert!(html.contains("$20.00"));
    assert!(!html.contains("$25.00"));
}

#[test]
fn test_out_of_stock_variant_disables_button() {
    let html = render_actions(single_variant(InventoryLevel::new(0)));

    assert!(html.contains("Out of stock"));
    assert!(html.contains("disabled"));
}

#[test]
fn test_product_without_variants_renders_no_price() {
    let html = render_actions(Product::new("Placeholder", "placeholder"));

    assert!(!html.contains("product-price"));
    assert!(html.contains("Select variant"));
}

#[test]
fn test_sale_price_shows_original_and_discount() {
    let mut product = single_variant(InventoryLevel::untracked());
    product.variants[0].compare_at_price = Some(usd(1200));

    let html = render_actions(product);

    assert!(html.contains("$9.00"));
    assert!(html.contains("Original: "));
    assert!(html.contains("line-through"));
    assert!(html.contains("$12.00"));
    assert!(html.contains("-25%"));
    assert!(html.contains("text-rose-600"));
}

#[test]
fn test_regular_price_has_no_sale_details() {
    let html = render_actions(single_variant(InventoryLevel::untracked()));

    assert!(!html.contains("Original: "));
    assert!(!html.contains("line-through"));
    assert!(!html.contains("price-discount"));
    assert!(!html.contains("text-rose-600"));
}

#[test]
fn test_sale_accent_class_comes_from_config() {
    let mut product = single_variant(InventoryLevel::untracked());
    product.variants[0].compare_at_price = Some(usd(1800));

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_storefront_config(StorefrontConfig::new("Shop").with_sale_accent_class("accent-sale"));
        view! { <ProductActions product=product/> }.to_html()
    });

    assert!(html.contains("accent-sale"));
    assert!(html.contains("-50%"));
}

#[test]
fn test_selection_prepopulates_selector_and_enables_button() {
    let product = sized_tee();
    let owner = Owner::new();
    let html = owner.with(|| {
        let cart = RwSignal::new(Cart::new(Currency::USD));
        let ctx = ProductActionsContext::new(product.clone(), cart, &StorefrontConfig::default());
        ctx.update_options(OptionId::new("size"), "L");
        provide_context(ctx);

        view! { <ProductActionsInner product=product/> }.to_html()
    });

    assert_eq!(html.matches("option-value-active").count(), 1);
    assert!(html.contains("aria-pressed=\"true\""));
    assert!(html.contains("$25.00"));
    assert!(html.contains("Add to cart"));
    assert!(!html.contains("disabled"));
}
