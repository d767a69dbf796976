//! reqwest-backed implementation of the backend traits.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{JobWorkApi, TransportApi};
use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, LabourRates, Order};
use crate::domain::payment::{GatewayCompletion, PaymentIntent};
use crate::domain::transport::{TransportLocation, TransportQuote};
use crate::domain::types::OrderId;
use crate::dto::jobwork::{
    CalculateRequest, CalculateResponse, CreateOrderRequest, CreateOrderResponse,
    InitiatePaymentResponse, LabourRatesResponse,
};
use crate::dto::transport::{TransportCostRequest, TransportCostResponse};
use crate::models::config::{ClientConfig, Credentials};

/// Blocking HTTP client for the ERP backend. Carries the bearer credentials
/// it was constructed with and attaches them to every request.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig, credentials: Credentials) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Maps non-success statuses to [`BackendError::Api`], pulling the
    /// server's `detail` field out of the error body when present.
    fn check(response: Response) -> BackendResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .or_else(|| body.get("message"))
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
            });
        Err(BackendError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.credentials.token())
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> BackendResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.credentials.token())
            .json(body)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST for ack-only endpoints; the response body is ignored.
    fn post_ack(&self, path: &str, query: &[(&str, &str)]) -> BackendResult<()> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.credentials.token())
            .query(query)
            .send()?;
        Self::check(response)?;
        Ok(())
    }
}

impl JobWorkApi for HttpBackend {
    fn labour_rates(&self) -> BackendResult<LabourRates> {
        let response: LabourRatesResponse = self.get_json("job-work/labour-rates")?;
        Ok(response.labour_rates)
    }

    fn calculate_cost(&self, items: &[LineItem]) -> BackendResult<CalculatedCost> {
        let request = CalculateRequest {
            items: items.to_vec(),
        };
        let response: CalculateResponse = self.post_json("job-work/calculate", &request)?;
        Ok(response.into())
    }

    fn create_order(&self, request: &CreateOrderRequest) -> BackendResult<Order> {
        let response: CreateOrderResponse = self.post_json("job-work/orders", request)?;
        Ok(response.order)
    }

    fn set_cash_preference(&self, order_id: OrderId) -> BackendResult<()> {
        self.post_ack(
            &format!("job-work/orders/{order_id}/set-cash-preference"),
            &[],
        )
    }

    fn initiate_payment(&self, order_id: OrderId) -> BackendResult<PaymentIntent> {
        let response: InitiatePaymentResponse = self.post_json(
            &format!("job-work/orders/{order_id}/initiate-payment"),
            &serde_json::json!({}),
        )?;
        Ok(response.into())
    }

    fn verify_payment(
        &self,
        order_id: OrderId,
        completion: &GatewayCompletion,
    ) -> BackendResult<()> {
        self.post_ack(
            &format!("job-work/orders/{order_id}/verify-payment"),
            &[
                ("razorpay_payment_id", completion.payment_id.as_str()),
                ("razorpay_signature", completion.signature.as_str()),
            ],
        )
    }

    fn design_pdf(&self, order_id: OrderId) -> BackendResult<Vec<u8>> {
        let response = self
            .client
            .get(self.url(&format!("job-work/orders/{order_id}/design-pdf")))
            .bearer_auth(self.credentials.token())
            .send()?;
        Ok(Self::check(response)?.bytes()?.to_vec())
    }
}

impl TransportApi for HttpBackend {
    fn estimate_transport_cost(
        &self,
        location: &TransportLocation,
        total_sqft: f64,
        include_gst: bool,
    ) -> BackendResult<TransportQuote> {
        let request = TransportCostRequest {
            delivery_location: location.clone(),
            total_sqft,
            include_gst,
        };
        let response: TransportCostResponse =
            self.post_json("transport/calculate-cost", &request)?;
        Ok(response.into())
    }
}
