//! Variant change detection for `on_variant_change` callbacks.

use turbo_commerce::catalog::ProductVariant;

/// Tracks the last resolved variant a listener was told about.
///
/// The first observation always counts as a change, so listeners learn the
/// initial resolution as well as every later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantChangeNotifier {
    last: Option<Option<ProductVariant>>,
}

impl VariantChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `variant`, returning whether it differs from the last one seen.
    pub fn observe(&mut self, variant: &Option<ProductVariant>) -> bool {
        if self.last.as_ref() == Some(variant) {
            return false;
        }
        self.last = Some(variant.clone());
        true
    }

    /// Record `variant` and run `notify` with it if it changed.
    pub fn notify_if_changed(
        &mut self,
        variant: &Option<ProductVariant>,
        notify: impl FnOnce(Option<ProductVariant>),
    ) {
        if self.observe(variant) {
            tracing::debug!(
                variant_id = ?variant.as_ref().map(|v| v.id.as_str()),
                "resolved variant changed"
            );
            notify(variant.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::prelude::*;

    fn variant(id: &str) -> Option<ProductVariant> {
        let mut variant = ProductVariant::new(
            ProductId::new("tee"),
            id.to_uppercase(),
            Money::new(1500, Currency::USD),
        );
        variant.id = VariantId::new(id);
        Some(variant)
    }

    #[test]
    fn test_first_observation_is_a_change() {
        let mut notifier = VariantChangeNotifier::new();
        assert!(notifier.observe(&None));
        assert!(!notifier.observe(&None));
    }

    #[test]
    fn test_notifies_once_per_distinct_value() {
        let mut notifier = VariantChangeNotifier::new();
        let mut seen = Vec::new();

        for value in [None, None, variant("s"), variant("s"), variant("m"), None] {
            notifier.notify_if_changed(&value, |v| seen.push(v.map(|v| v.id)));
        }

        assert_eq!(
            seen,
            vec![
                None,
                Some(VariantId::new("s")),
                Some(VariantId::new("m")),
                None
            ]
        );
    }
}
