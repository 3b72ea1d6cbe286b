//! Pizzeria order engine
//!
//! The structural core of the ordering system:
//! - `payment` — uniform gateway contract over three incompatible external
//!   payment backends
//! - `subsystems` — id allocation, kitchen preparation, customer
//!   notifications
//! - `orders` — the [`OrderManager`] facade driving the order lifecycle
//!
//! Everything is in-memory and synchronous; the only cross-thread guarantee
//! is unique, monotonic order-id allocation.

pub mod orders;
pub mod payment;
pub mod subsystems;

// Re-exports
pub use orders::manager::{OrderManager, PaymentReceipt};
pub use payment::{CardAdapter, CashAdapter, GatewayAdapter, PaymentGateway, WalletAdapter};
pub use subsystems::id_allocator::OrderIdAllocator;
