//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout() -> u64 {
    30
}

fn default_geolocation_timeout() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Client configuration shared across the workflow services.
pub struct ClientConfig {
    /// Base URL of the ERP backend, e.g. `https://erp.example.com/api`.
    pub api_base_url: String,
    /// Publishable key id handed to the hosted payment widget.
    pub gateway_key_id: String,
    /// Per-request timeout for backend calls, seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Bound on the one-shot device geolocation lookup, seconds.
    #[serde(default = "default_geolocation_timeout")]
    pub geolocation_timeout_secs: u64,
}

/// Bearer credentials injected into the HTTP client at construction.
///
/// Passed explicitly rather than read from ambient session storage, so every
/// request's identity is visible at the call site. The token is not validated
/// locally; the server enforces it.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    bearer_token: String,
}

impl Credentials {
    pub fn new<S: Into<String>>(bearer_token: S) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.bearer_token
    }
}

impl std::fmt::Debug for Credentials {
    /// Token is elided so credentials never land in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}
