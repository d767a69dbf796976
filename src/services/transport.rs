//! Transport Estimator: location resolution and cost quoting.

use std::time::Duration;

use crate::backend::{LocationProvider, TransportApi};
use crate::domain::checkout::{ActionKind, CheckoutState};
use crate::domain::item::total_area_sqft;
use crate::services::{ServiceError, ServiceResult};

/// Requests a transport cost quote for the current location and item area.
///
/// Fails fast with a form error when neither an address nor coordinates are
/// present — no network call is made. A server-side failure clears any
/// previously held quote before surfacing the server's detail.
pub fn estimate_cost<B>(state: &mut CheckoutState, api: &B) -> ServiceResult<()>
where
    B: TransportApi + ?Sized,
{
    if !state.location().is_resolvable() {
        return Err(ServiceError::Form(
            "enter a delivery address or share your location first".to_string(),
        ));
    }
    if !state.begin_action(ActionKind::Estimate) {
        return Err(ServiceError::Busy(ActionKind::Estimate));
    }

    let total_sqft = total_area_sqft(state.items());
    let result = api.estimate_transport_cost(state.location(), total_sqft, true);
    state.finish_action(ActionKind::Estimate);

    match result {
        Ok(quote) => {
            state.store_quote(quote);
            Ok(())
        }
        Err(err) => {
            state.clear_quote();
            log::error!("Failed to estimate transport cost: {err}");
            Err(err.into())
        }
    }
}

/// One-shot device geolocation: on success stores the coordinates and
/// immediately requests a cost quote. On failure the location stays
/// unresolved; there is no IP-geocoding fallback.
pub fn resolve_location<L, B>(
    state: &mut CheckoutState,
    provider: &L,
    api: &B,
    timeout: Duration,
) -> ServiceResult<()>
where
    L: LocationProvider + ?Sized,
    B: TransportApi + ?Sized,
{
    if !state.begin_action(ActionKind::Locate) {
        return Err(ServiceError::Busy(ActionKind::Locate));
    }
    let result = provider.current_location(timeout);
    state.finish_action(ActionKind::Locate);

    let point = result.map_err(|err| {
        log::error!("Device location lookup failed: {err}");
        err
    })?;
    state.set_coordinates(point);
    estimate_cost(state, api)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::backend::errors::{BackendError, LocationError};
    use crate::backend::mock::{MockBackend, MockLocator};
    use crate::domain::transport::{GeoPoint, TransportQuote};

    fn quote(total: f64) -> TransportQuote {
        TransportQuote {
            distance_km: 12.5,
            base_charge: total * 0.8,
            gst_amount: total * 0.2,
            total_transport_cost: total,
        }
    }

    /// No address and no coordinates: user-facing error, zero network calls.
    #[test]
    fn estimate_fails_fast_without_location() {
        let mut state = CheckoutState::new();
        let mut api = MockBackend::new();
        api.expect_estimate_transport_cost().times(0);

        let result = estimate_cost(&mut state, &api);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    /// Successful estimate stores the immutable quote snapshot.
    #[test]
    fn estimate_stores_quote() {
        let mut state = CheckoutState::new();
        state.set_transport_required(true);
        state.set_address("Test St".into());

        let mut api = MockBackend::new();
        api.expect_estimate_transport_cost()
            .withf(|location, _, include_gst| location.address == "Test St" && *include_gst)
            .times(1)
            .returning(|_, _, _| Ok(quote(500.0)));

        estimate_cost(&mut state, &api).expect("estimate should succeed");
        assert_eq!(
            state.transport_quote().map(|q| q.total_transport_cost),
            Some(500.0)
        );
    }

    /// Server failure clears any previous quote and surfaces the detail.
    #[test]
    fn estimate_failure_clears_previous_quote() {
        let mut state = CheckoutState::new();
        state.set_transport_required(true);
        state.set_address("Test St".into());
        state.store_quote(quote(300.0));

        let mut api = MockBackend::new();
        api.expect_estimate_transport_cost().times(1).returning(|_, _, _| {
            Err(BackendError::Api {
                status: 422,
                detail: Some("delivery point outside service area".to_string()),
            })
        });

        let result = estimate_cost(&mut state, &api);
        assert!(state.transport_quote().is_none());
        match result {
            Err(ServiceError::Backend(err)) => {
                assert_eq!(err.detail(), Some("delivery point outside service area"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Device lookup feeds coordinates straight into an estimate request.
    #[test]
    fn resolve_location_triggers_estimate() {
        let mut state = CheckoutState::new();
        let mut locator = MockLocator::new();
        locator
            .expect_current_location()
            .times(1)
            .returning(|_| Ok(GeoPoint {
                lat: 18.52,
                lng: 73.86,
            }));
        let mut api = MockBackend::new();
        api.expect_estimate_transport_cost()
            .withf(|location, _, _| location.coordinates.is_some())
            .times(1)
            .returning(|_, _, _| Ok(quote(650.0)));

        resolve_location(&mut state, &locator, &api, Duration::from_secs(10))
            .expect("resolution should succeed");
        assert!(state.transport_quote().is_some());
    }

    /// Lookup failure leaves the location unresolved and skips the estimate.
    #[test]
    fn resolve_location_failure_leaves_state_untouched() {
        let mut state = CheckoutState::new();
        let mut locator = MockLocator::new();
        locator
            .expect_current_location()
            .times(1)
            .returning(|_| Err(LocationError::PermissionDenied));
        let mut api = MockBackend::new();
        api.expect_estimate_transport_cost().times(0);

        let result = resolve_location(&mut state, &locator, &api, Duration::from_secs(10));
        assert!(matches!(
            result,
            Err(ServiceError::Location(LocationError::PermissionDenied))
        ));
        assert!(state.location().coordinates.is_none());
        assert!(!state.busy.is_busy(ActionKind::Locate));
    }
}
