//! Wire payloads exchanged with the backend REST endpoints.

pub mod jobwork;
pub mod transport;
