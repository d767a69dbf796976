//! Workflow operations, written as free functions generic over the backend
//! trait seams so they can be exercised against mock boundaries.

use thiserror::Error;

use crate::backend::errors::{BackendError, LocationError};
use crate::domain::checkout::{ActionKind, SubmissionBlock, TransitionError};
use crate::domain::payment::GatewayError;
use crate::domain::types::TypeConstraintError;

pub mod builder;
pub mod checkout;
pub mod payment;
#[cfg(all(test, feature = "test-mocks"))]
pub(crate) mod testutil;
pub mod transport;

/// Failure taxonomy of the workflow services. None of these are fatal to the
/// page; every variant maps to a transient user-facing notification and the
/// current step is preserved.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation caught before any network call.
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    #[error(transparent)]
    Blocked(#[from] SubmissionBlock),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// A request of the same action type is already in flight.
    #[error("a {0:?} request is already in flight")]
    Busy(ActionKind),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The gateway charged the customer but server-side verification failed.
    /// Carries the gateway payment id so ops can reconcile; no client-side
    /// retry or rollback happens.
    #[error("payment verification failed for gateway payment {payment_id}: {source}")]
    VerificationFailed {
        payment_id: String,
        source: BackendError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;
