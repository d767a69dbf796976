use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment method chosen on the payment step. `Unset` is the only state in
/// which neither confirmation action is available.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Unset,
    Cash,
    Online,
}

/// Gateway payment intent issued by the backend for an online payment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntent {
    /// Advance amount to collect, in the smallest currency unit.
    pub amount: f64,
    pub currency: String,
    pub gateway_order_id: String,
    pub job_work_number: String,
    pub advance_percent: f64,
}

/// Completion payload delivered by the hosted payment widget.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayCompletion {
    pub payment_id: String,
    pub signature: String,
}

/// Outcomes of the opaque widget boundary that are not completions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// User closed the widget without paying. Not an error in the order's
    /// lifecycle; the workflow stays on the payment step untouched.
    #[error("payment widget dismissed")]
    Dismissed,
    /// The widget reported a failure before any completion callback fired.
    #[error("payment gateway failure: {0}")]
    Failed(String),
}
