//! Action button.

use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    /// Main call to action.
    #[default]
    Primary,
    Secondary,
    /// No background, text only.
    Transparent,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Transparent => "btn btn-transparent",
        }
    }
}

/// A button that runs `on_click` unless disabled.
#[component]
pub fn Button(
    on_click: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {class}", variant.class())
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| {
                if !disabled.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
