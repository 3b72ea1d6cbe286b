//! Order entity and lifecycle state machine
//!
//! The entity itself holds data and exposes the legal transition table;
//! enforcement of transitions (and of which operations are allowed in which
//! state) is the orchestrator's responsibility. Orders are owned exclusively
//! by the orchestrator's registry — readers get clones, never references.

use crate::pizza::PizzaItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Paid,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Legal forward transitions; the table is total — every pair of
    /// statuses is classified, and terminal states absorb.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Ready)
                | (Ready, Paid)
                | (Paid, Completed)
                | (Pending, Cancelled)
                | (Preparing, Cancelled)
                | (Ready, Cancelled)
        )
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether items may still be attached in this state
    pub fn accepts_items(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Paid => "PAID",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// A customer order: priced items in insertion order plus a derived total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    id: u64,
    items: Vec<PizzaItem>,
    /// Derived: always the sum of current item costs
    total: Decimal,
    status: OrderStatus,
    /// Creation timestamp (Unix milliseconds)
    created_at: i64,
    /// Last update timestamp (Unix milliseconds)
    updated_at: i64,
}

impl Order {
    /// Create a new empty order in `Pending` status
    pub fn new(id: u64) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id,
            items: Vec::new(),
            total: Decimal::ZERO,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &[PizzaItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Append an item and recompute the total synchronously
    pub fn add_item(&mut self, item: PizzaItem) {
        self.items.push(item);
        self.recalculate_total();
        self.touch();
    }

    /// Set the status; legality is checked by the orchestrator, not here
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.touch();
    }

    /// Recompute the total from the item chain, O(item count)
    fn recalculate_total(&mut self) {
        self.total = self.items.iter().map(PizzaItem::cost).sum();
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::{PizzaSize, Topping};

    #[test]
    fn test_new_order_is_pending_and_empty() {
        let order = Order::new(1000);
        assert_eq!(order.id(), 1000);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.items().is_empty());
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_tracks_item_costs() {
        let mut order = Order::new(1000);
        order.add_item(PizzaItem::new(PizzaSize::Medium, "thin"));
        assert_eq!(order.total(), Decimal::new(1099, 2));

        order.add_item(
            PizzaItem::new(PizzaSize::Small, "thick").with_topping(Topping::Pepperoni),
        );
        assert_eq!(order.total(), Decimal::new(2198, 2)); // 10.99 + 8.99 + 2.00

        let expected: Decimal = order.items().iter().map(PizzaItem::cost).sum();
        assert_eq!(order.total(), expected);
    }

    #[test]
    fn test_legal_transition_path() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Paid));
        assert!(Paid.can_transition_to(Completed));
    }

    #[test]
    fn test_cancellation_reachable_until_paid() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(Ready.can_transition_to(Cancelled));
        assert!(!Paid.can_transition_to(Cancelled));
    }

    #[test]
    fn test_no_backwards_or_skipping_transitions() {
        use OrderStatus::*;
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Paid));
        assert!(!Ready.can_transition_to(Preparing));
        assert!(!Ready.can_transition_to(Pending));
        assert!(!Ready.can_transition_to(Completed));
    }

    #[test]
    fn test_terminal_states_absorb() {
        use OrderStatus::*;
        for next in [Pending, Preparing, Ready, Paid, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Ready.is_terminal());
    }

    #[test]
    fn test_accepts_items_only_before_ready() {
        use OrderStatus::*;
        assert!(Pending.accepts_items());
        assert!(Preparing.accepts_items());
        assert!(!Ready.accepts_items());
        assert!(!Paid.accepts_items());
        assert!(!Completed.accepts_items());
        assert!(!Cancelled.accepts_items());
    }

    #[test]
    fn test_status_wire_naming() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"PREPARING\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }
}
