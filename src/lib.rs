//! Client-side job-work checkout for a glass-manufacturing ERP.
//!
//! Implements the multi-step order workflow — item entry, transport cost
//! estimation, order submission and payment — against a remote backend that
//! stays authoritative for pricing, order numbers and payment state. All
//! workflow state is ephemeral: it lives in a [`domain::checkout::CheckoutState`]
//! for one page view and is discarded on navigation away.
//!
//! The backend, the hosted payment widget and the device geolocation
//! capability sit behind the traits in [`backend`]; services are generic
//! over those traits, with a reqwest-backed implementation behind the
//! `http` feature and mockall doubles behind `test-mocks`.

pub mod backend;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod services;
