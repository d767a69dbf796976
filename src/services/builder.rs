//! Order Builder: line-item list operations and labour rates.

use crate::backend::JobWorkApi;
use crate::domain::checkout::CheckoutState;
use crate::domain::item::LineItem;
use crate::domain::order::LabourRates;
use crate::forms::item::{ItemField, apply_update};
use crate::services::{ServiceError, ServiceResult};

pub use crate::domain::checkout::MIN_LINE_ITEMS;

/// Appends a default-valued item row. Like every item mutation, this
/// invalidates any held transport quote.
pub fn add_item(state: &mut CheckoutState) {
    state.push_item(LineItem::default());
}

/// Removes the item at `index`. A no-op when only one row remains or the
/// index is out of range; returns whether a row was removed.
pub fn remove_item(state: &mut CheckoutState, index: usize) -> bool {
    state.remove_item_at(index)
}

/// Applies a single-field update to the item at `index`. Returns false when
/// the index is out of range.
pub fn update_item(state: &mut CheckoutState, index: usize, field: ItemField, raw: &str) -> bool {
    state.edit_item(index, |item| apply_update(item, field, raw))
}

/// Fetches the published per-thickness labour rates for display.
pub fn load_labour_rates<B>(api: &B) -> ServiceResult<LabourRates>
where
    B: JobWorkApi + ?Sized,
{
    api.labour_rates().map_err(|err| {
        log::error!("Failed to load labour rates: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::types::Thickness;

    /// Rates come back keyed by thickness for display next to the item rows.
    #[test]
    fn labour_rates_passthrough() {
        let mut api = MockBackend::new();
        api.expect_labour_rates().times(1).returning(|| {
            Ok(LabourRates::from([
                (Thickness::Mm6, 55.0),
                (Thickness::Mm8, 70.0),
            ]))
        });

        let rates = load_labour_rates(&api).expect("rates should load");
        assert_eq!(rates.get(&Thickness::Mm6), Some(&55.0));
    }

    #[test]
    fn labour_rates_failure_is_surfaced() {
        let mut api = MockBackend::new();
        api.expect_labour_rates()
            .times(1)
            .returning(|| Err(BackendError::Network("offline".to_string())));

        assert!(matches!(
            load_labour_rates(&api),
            Err(ServiceError::Backend(_))
        ));
    }
}
