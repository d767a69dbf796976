//! Request/response shapes of the `transport/calculate-cost` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::transport::{TransportLocation, TransportQuote};

/// Body of `POST transport/calculate-cost`.
#[derive(Debug, Clone, Serialize)]
pub struct TransportCostRequest {
    pub delivery_location: TransportLocation,
    pub total_sqft: f64,
    pub include_gst: bool,
}

/// Response of `POST transport/calculate-cost`, stored verbatim as the quote.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportCostResponse {
    pub distance_km: f64,
    pub base_charge: f64,
    pub gst_amount: f64,
    pub total_transport_cost: f64,
}

impl From<TransportCostResponse> for TransportQuote {
    fn from(response: TransportCostResponse) -> Self {
        TransportQuote {
            distance_km: response.distance_km,
            base_charge: response.base_charge,
            gst_amount: response.gst_amount,
            total_transport_cost: response.total_transport_cost,
        }
    }
}
