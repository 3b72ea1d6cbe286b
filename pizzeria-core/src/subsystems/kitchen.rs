//! Kitchen preparation subsystem
//!
//! Produces the ordered list of preparation steps for an order instead of
//! printing them, so the sequence is reportable and testable.

use shared::order::Order;

/// Stateless kitchen collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct KitchenService;

impl KitchenService {
    pub fn new() -> Self {
        Self
    }

    /// Preparation steps for the whole order, items in insertion order,
    /// each item's chain innermost-first
    pub fn prepare_order(&self, order: &Order) -> Vec<String> {
        let mut steps = Vec::new();
        steps.push(format!("Starting preparation for order #{}", order.id()));
        for item in order.items() {
            steps.extend(item.preparation_steps());
        }
        steps.push(format!("Order #{} ready for pickup", order.id()));

        for step in &steps {
            tracing::debug!(order_id = order.id(), step = %step, "kitchen");
        }
        steps
    }
}
