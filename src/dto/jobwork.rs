//! Request/response shapes of the `job-work/*` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, CostLine, CostSummary, LabourRates, Order};
use crate::domain::payment::PaymentIntent;
use crate::domain::types::ClientReference;

/// Response of `GET job-work/labour-rates`.
#[derive(Debug, Clone, Deserialize)]
pub struct LabourRatesResponse {
    pub labour_rates: LabourRates,
}

/// Body of `POST job-work/calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateRequest {
    pub items: Vec<LineItem>,
}

/// Response of `POST job-work/calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateResponse {
    pub items: Vec<CostLine>,
    pub summary: CostSummary,
}

impl From<CalculateResponse> for CalculatedCost {
    fn from(response: CalculateResponse) -> Self {
        CalculatedCost {
            lines: response.items,
            summary: response.summary,
        }
    }
}

/// Body of `POST job-work/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub delivery_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    pub items: Vec<LineItem>,
    pub disclaimer_accepted: bool,
    pub transport_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_cost: Option<f64>,
    /// True when the customer only wants a quotation, no payment intent.
    pub quotation_only: bool,
    pub client_reference: ClientReference,
}

/// Response of `POST job-work/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    pub order: Order,
}

/// Response of `POST job-work/orders/{id}/initiate-payment`.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiatePaymentResponse {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub razorpay_order_id: String,
    pub job_work_number: String,
    pub advance_percent: f64,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl From<InitiatePaymentResponse> for PaymentIntent {
    fn from(response: InitiatePaymentResponse) -> Self {
        PaymentIntent {
            amount: response.amount,
            currency: response.currency,
            gateway_order_id: response.razorpay_order_id,
            job_work_number: response.job_work_number,
            advance_percent: response.advance_percent,
        }
    }
}
