pub mod checkout;
pub mod item;
