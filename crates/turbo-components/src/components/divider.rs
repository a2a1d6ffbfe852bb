//! Section divider.

use leptos::prelude::*;

/// Horizontal rule between page sections.
#[component]
pub fn Divider(#[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "divider".to_string()
    } else {
        format!("divider {class}")
    };
    view! { <hr class=class/> }
}
