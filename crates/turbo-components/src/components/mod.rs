//! Storefront UI components.

mod button;
mod divider;
mod option_select;
mod product_actions;

pub use button::{Button, ButtonVariant};
pub use divider::Divider;
pub use option_select::OptionSelect;
pub use product_actions::{ActionButtonState, ProductActions, ProductActionsInner};
