//! Picker for a single product option.

use leptos::prelude::*;
use turbo_commerce::catalog::ProductOption;
use turbo_commerce::ids::OptionId;

/// One button per option value; the current value is marked active.
#[component]
pub fn OptionSelect(
    option: ProductOption,
    /// Currently selected value, if any.
    #[prop(into)]
    current: Signal<Option<String>>,
    /// Called with `(option id, value)` when a value is picked.
    update_option: Callback<(OptionId, String)>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let option_id = option.id.clone();

    view! {
        <div class="option-select" data-option-id=option_id.to_string()>
            <span class="option-select-title">{format!("Select {title}")}</span>
            <div class="option-select-values">
                {option
                    .values
                    .into_iter()
                    .map(|value| {
                        let option_id = option_id.clone();
                        let is_current = {
                            let value = value.clone();
                            move || current.with(|c| c.as_deref() == Some(value.as_str()))
                        };
                        let is_current_for_aria = is_current.clone();
                        let picked = value.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_current() { "option-value option-value-active" } else { "option-value" }
                                }
                                aria-pressed=move || is_current_for_aria().to_string()
                                on:click=move |_| update_option.run((option_id.clone(), picked.clone()))
                            >
                                {value}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
