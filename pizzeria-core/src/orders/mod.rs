//! Order orchestration

pub mod manager;

pub use manager::{OrderManager, PaymentReceipt};
