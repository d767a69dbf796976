//! Mock boundary implementations for isolating services in tests.

use std::time::Duration;

use mockall::mock;

use crate::backend::errors::{BackendResult, LocationError};
use crate::backend::{JobWorkApi, LocationProvider, PaymentGateway, TransportApi};
use crate::domain::customer::CustomerDetails;
use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, LabourRates, Order};
use crate::domain::payment::{GatewayCompletion, GatewayError, PaymentIntent};
use crate::domain::transport::{GeoPoint, TransportLocation, TransportQuote};
use crate::domain::types::OrderId;
use crate::dto::jobwork::CreateOrderRequest;

mock! {
    pub Backend {}

    impl JobWorkApi for Backend {
        fn labour_rates(&self) -> BackendResult<LabourRates>;
        fn calculate_cost(&self, items: &[LineItem]) -> BackendResult<CalculatedCost>;
        fn create_order(&self, request: &CreateOrderRequest) -> BackendResult<Order>;
        fn set_cash_preference(&self, order_id: OrderId) -> BackendResult<()>;
        fn initiate_payment(&self, order_id: OrderId) -> BackendResult<PaymentIntent>;
        fn verify_payment(
            &self,
            order_id: OrderId,
            completion: &GatewayCompletion,
        ) -> BackendResult<()>;
        fn design_pdf(&self, order_id: OrderId) -> BackendResult<Vec<u8>>;
    }

    impl TransportApi for Backend {
        fn estimate_transport_cost(
            &self,
            location: &TransportLocation,
            total_sqft: f64,
            include_gst: bool,
        ) -> BackendResult<TransportQuote>;
    }
}

mock! {
    pub Gateway {}

    impl PaymentGateway for Gateway {
        fn collect(
            &self,
            intent: &PaymentIntent,
            prefill: &CustomerDetails,
        ) -> Result<GatewayCompletion, GatewayError>;
    }
}

mock! {
    pub Locator {}

    impl LocationProvider for Locator {
        fn current_location(&self, timeout: Duration) -> Result<GeoPoint, LocationError>;
    }
}
