use thiserror::Error;

/// Failures crossing the backend HTTP boundary.
///
/// Every variant is non-fatal to the workflow: the caller surfaces the
/// message and keeps the current step, except where the spec requires a
/// held value to be dropped (transport quote on estimate failure).
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: connect, timeout, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `detail` carries the
    /// server's error message when the body had one.
    #[error("server error ({status}): {}", detail.as_deref().unwrap_or("request failed"))]
    Api { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl BackendError {
    /// Server-provided detail, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(feature = "http")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Api {
                status: status.as_u16(),
                detail: None,
            }
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            BackendError::Network(err.to_string())
        } else {
            BackendError::Unexpected(err.to_string())
        }
    }
}

/// Failures of the one-shot device geolocation lookup. There is no fallback
/// to IP geocoding; the caller surfaces the error and leaves the location
/// unresolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("device location capability unavailable")]
    Unavailable,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location lookup timed out")]
    Timeout,
}
