//! OrderManager - the facade coordinating every other component
//!
//! This module handles:
//! - Order creation and registry ownership
//! - Lifecycle transition enforcement (the entity itself does not validate)
//! - Kitchen preparation and customer notification sequencing
//! - Payment finalization through a gateway adapter
//!
//! # Operation Flow
//!
//! ```text
//! create_order()                      PENDING, registered
//! add_item(id, item)                  PENDING/PREPARING only, total recomputed
//! process_order(id, contact)          PENDING -> PREPARING, confirm,
//!                                     prepare items, -> READY, notify ready
//! complete_payment(id, gw, cred, c)   READY only: validate, charge,
//!                                     -> PAID -> COMPLETED, confirm payment
//! cancel_order(id)                    PENDING/PREPARING/READY -> CANCELLED
//! ```
//!
//! Every failure is an `Err` value and leaves all entities untouched; the
//! PAID -> COMPLETED pair happens under one write-lock hold, so no caller
//! ever observes a PAID order.

use crate::payment::{GatewayAdapter, PaymentGateway};
use crate::subsystems::{KitchenService, NotificationService, OrderIdAllocator};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{OrderError, OrderResult};
use shared::money::format_amount;
use shared::order::{Order, OrderStatus};
use shared::pizza::PizzaItem;
use std::collections::HashMap;
use std::sync::Arc;

/// Successful payment summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentReceipt {
    pub order_id: u64,
    pub amount: Decimal,
    pub method: String,
}

/// Facade over the order registry, kitchen, notifications and payment
///
/// All order mutation goes through this type (single-writer invariant);
/// reads hand out clones so no caller can alias registry state.
pub struct OrderManager {
    ids: Arc<OrderIdAllocator>,
    registry: RwLock<HashMap<u64, Order>>,
    kitchen: KitchenService,
    notifications: NotificationService,
}

impl OrderManager {
    /// The allocator is created at startup and passed in explicitly so the
    /// single-counter invariant holds across however many managers share it
    pub fn new(ids: Arc<OrderIdAllocator>) -> Self {
        Self {
            ids,
            registry: RwLock::new(HashMap::new()),
            kitchen: KitchenService::new(),
            notifications: NotificationService::new(),
        }
    }

    /// Create and register a new PENDING order; returns a snapshot of it
    pub fn create_order(&self) -> Order {
        let id = self.ids.next();
        let order = Order::new(id);
        self.registry.write().insert(id, order.clone());
        tracing::info!(order_id = id, "order registered");
        order
    }

    /// Append a priced item; allowed only while PENDING or PREPARING.
    /// Returns the recomputed total.
    pub fn add_item(&self, order_id: u64, item: PizzaItem) -> OrderResult<Decimal> {
        let mut registry = self.registry.write();
        let order = registry
            .get_mut(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        if !order.status().accepts_items() {
            return Err(OrderError::IllegalTransition {
                order_id,
                status: order.status(),
                action: "add item",
            });
        }

        order.add_item(item);
        tracing::info!(
            order_id,
            total = %format_amount(order.total()),
            "item added"
        );
        Ok(order.total())
    }

    /// Drive a PENDING order through preparation to READY.
    ///
    /// Sequence is a contract: PREPARING first, confirmation next, then the
    /// kitchen steps for every item, then READY, then the ready notice.
    /// Re-processing an order that already advanced is rejected rather than
    /// silently repeating confirmation and preparation.
    pub fn process_order(&self, order_id: u64, contact: &str) -> OrderResult<Vec<String>> {
        let mut registry = self.registry.write();
        let order = registry
            .get_mut(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        transition(order, OrderStatus::Preparing, "process order")?;
        self.notifications.order_confirmation(order_id, contact);

        let steps = self.kitchen.prepare_order(order);

        transition(order, OrderStatus::Ready, "process order")?;
        self.notifications.order_ready(order_id, contact);

        Ok(steps)
    }

    /// Finalize payment for a READY order through the chosen gateway.
    ///
    /// Validation precedes the charge; a declined charge or rejected
    /// credential leaves status untouched and sends nothing. On success the
    /// order moves PAID then COMPLETED under the same lock hold and the
    /// payment confirmation goes out.
    pub fn complete_payment(
        &self,
        order_id: u64,
        gateway: &mut GatewayAdapter,
        credential: &str,
        contact: &str,
    ) -> OrderResult<PaymentReceipt> {
        let mut registry = self.registry.write();
        let order = registry
            .get_mut(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        if order.status() != OrderStatus::Ready {
            return Err(OrderError::IllegalTransition {
                order_id,
                status: order.status(),
                action: "complete payment",
            });
        }

        if !gateway.validate(credential) {
            return Err(OrderError::InvalidCredential {
                method: gateway.method_name(),
            });
        }

        let amount = order.total();
        if !gateway.charge(amount, credential) {
            tracing::warn!(
                order_id,
                method = gateway.method_name(),
                amount = %format_amount(amount),
                "payment declined"
            );
            return Err(OrderError::PaymentDeclined {
                method: gateway.method_name(),
                order_id,
            });
        }

        transition(order, OrderStatus::Paid, "complete payment")?;
        transition(order, OrderStatus::Completed, "complete payment")?;
        self.notifications
            .payment_confirmation(order_id, contact, amount, gateway.method_name());

        Ok(PaymentReceipt {
            order_id,
            amount,
            method: gateway.method_name().to_string(),
        })
    }

    /// Cancel an order that has not been paid yet
    pub fn cancel_order(&self, order_id: u64) -> OrderResult<()> {
        let mut registry = self.registry.write();
        let order = registry
            .get_mut(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;
        transition(order, OrderStatus::Cancelled, "cancel order")
    }

    /// Snapshot of an order; never mutates state
    pub fn get_order(&self, order_id: u64) -> OrderResult<Order> {
        self.registry
            .read()
            .get(&order_id)
            .cloned()
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Rendered order summary
    pub fn display_order(&self, order_id: u64) -> OrderResult<String> {
        let registry = self.registry.read();
        let order = registry
            .get(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        let mut out = format!("Order #{} [{}]\n", order.id(), order.status());
        for (index, item) in order.items().iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({})\n",
                index + 1,
                item.describe(),
                format_amount(item.cost())
            ));
        }
        out.push_str(&format!("Total: {}", format_amount(order.total())));
        Ok(out)
    }

    /// Number of orders ever registered (orders are never deleted)
    pub fn order_count(&self) -> usize {
        self.registry.read().len()
    }

    /// Notification outbox, for receipts, demos and sequencing assertions
    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }
}

/// Apply a status change after consulting the transition table
fn transition(order: &mut Order, next: OrderStatus, action: &'static str) -> OrderResult<()> {
    let from = order.status();
    if !from.can_transition_to(next) {
        return Err(OrderError::IllegalTransition {
            order_id: order.id(),
            status: from,
            action,
        });
    }
    order.set_status(next);
    tracing::info!(order_id = order.id(), from = %from, to = %next, "order status changed");
    Ok(())
}
