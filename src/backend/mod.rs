//! Trait seams over everything outside this process: the ERP backend, the
//! hosted payment widget and the device geolocation capability. The service
//! layer is generic over these traits; the reqwest-backed implementation
//! lives in [`http`], mockall doubles in [`mock`].

use std::time::Duration;

use crate::backend::errors::{BackendResult, LocationError};
use crate::domain::customer::CustomerDetails;
use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, LabourRates, Order};
use crate::domain::payment::{GatewayCompletion, GatewayError, PaymentIntent};
use crate::domain::transport::{GeoPoint, TransportLocation, TransportQuote};
use crate::domain::types::OrderId;
use crate::dto::jobwork::CreateOrderRequest;

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// The `job-work/*` endpoints of the ERP backend.
pub trait JobWorkApi {
    /// `GET job-work/labour-rates`
    fn labour_rates(&self) -> BackendResult<LabourRates>;
    /// `POST job-work/calculate` — authoritative cost breakdown.
    fn calculate_cost(&self, items: &[LineItem]) -> BackendResult<CalculatedCost>;
    /// `POST job-work/orders`
    fn create_order(&self, request: &CreateOrderRequest) -> BackendResult<Order>;
    /// `POST job-work/orders/{id}/set-cash-preference`
    fn set_cash_preference(&self, order_id: OrderId) -> BackendResult<()>;
    /// `POST job-work/orders/{id}/initiate-payment`
    fn initiate_payment(&self, order_id: OrderId) -> BackendResult<PaymentIntent>;
    /// `POST job-work/orders/{id}/verify-payment`
    fn verify_payment(
        &self,
        order_id: OrderId,
        completion: &GatewayCompletion,
    ) -> BackendResult<()>;
    /// `GET job-work/orders/{id}/design-pdf` — binary stream.
    fn design_pdf(&self, order_id: OrderId) -> BackendResult<Vec<u8>>;
}

/// The transport cost estimator endpoint.
pub trait TransportApi {
    /// `POST transport/calculate-cost`
    fn estimate_transport_cost(
        &self,
        location: &TransportLocation,
        total_sqft: f64,
        include_gst: bool,
    ) -> BackendResult<TransportQuote>;
}

/// The hosted payment widget, reduced to its contract: open with an intent
/// and prefilled contact details, block until the user completes or closes
/// it. Dismissal comes back as [`GatewayError::Dismissed`].
pub trait PaymentGateway {
    fn collect(
        &self,
        intent: &PaymentIntent,
        prefill: &CustomerDetails,
    ) -> Result<GatewayCompletion, GatewayError>;
}

/// One-shot device geolocation lookup with a bounded timeout.
pub trait LocationProvider {
    fn current_location(&self, timeout: Duration) -> Result<GeoPoint, LocationError>;
}
