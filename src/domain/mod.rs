pub mod checkout;
pub mod customer;
pub mod item;
pub mod order;
pub mod payment;
pub mod transport;
pub mod types;
