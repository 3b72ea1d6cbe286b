//! Error taxonomy for the order subsystem
//!
//! Four recoverable error kinds, surfaced as explicit `Result` values at the
//! orchestrator boundary so callers can branch without unwinding machinery.
//! A failed operation never leaves partial mutation behind.
//!
//! Numeric codes follow the workspace convention:
//! - 4xxx: order errors
//! - 5xxx: payment errors

use crate::order::OrderStatus;
use thiserror::Error;

/// Order subsystem error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Referenced order identifier does not exist
    #[error("order #{0} not found")]
    NotFound(u64),

    /// The operation is not legal in the order's current status
    #[error("order #{order_id} is {status}, cannot {action}")]
    IllegalTransition {
        order_id: u64,
        status: OrderStatus,
        action: &'static str,
    },

    /// The gateway rejected the supplied credential
    #[error("invalid {method} credential")]
    InvalidCredential { method: &'static str },

    /// The gateway charge call reported failure
    #[error("{method} payment declined for order #{order_id}")]
    PaymentDeclined { method: &'static str, order_id: u64 },
}

impl OrderError {
    /// Stable numeric code for logs and cross-boundary reporting
    pub fn code(&self) -> u16 {
        match self {
            OrderError::NotFound(_) => 4001,
            OrderError::IllegalTransition { .. } => 4002,
            OrderError::InvalidCredential { .. } => 5001,
            OrderError::PaymentDeclined { .. } => 5002,
        }
    }
}

/// Type alias for Result with OrderError
pub type OrderResult<T> = Result<T, OrderError>;
