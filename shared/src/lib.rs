//! Shared domain types for the pizzeria order core
//!
//! Common types used across the workspace: monetary helpers, the pizza
//! pricing/description chain, the order entity with its lifecycle state
//! machine, and the error taxonomy.

pub mod error;
pub mod money;
pub mod order;
pub mod pizza;

// Re-exports
pub use error::{OrderError, OrderResult};
pub use order::{Order, OrderStatus};
pub use pizza::{BasePizza, PizzaItem, PizzaSize, Topping};
pub use serde::{Deserialize, Serialize};
