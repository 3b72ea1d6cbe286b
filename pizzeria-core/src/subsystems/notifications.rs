//! Customer notification subsystem
//!
//! Notifications go to structured logs and into an in-memory outbox. The
//! outbox preserves emission order, which makes the orchestrator's
//! notify-vs-mutate sequencing contract observable.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::money::format_amount;

/// Notification category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    OrderConfirmation,
    OrderReady,
    PaymentConfirmation,
}

/// One emitted customer notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub order_id: u64,
    pub contact: String,
    pub kind: NotificationKind,
    pub message: String,
}

/// Notification emitter with an inspectable outbox
#[derive(Debug, Default)]
pub struct NotificationService {
    outbox: RwLock<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_confirmation(&self, order_id: u64, contact: &str) {
        self.emit(Notification {
            order_id,
            contact: contact.to_string(),
            kind: NotificationKind::OrderConfirmation,
            message: format!("Your order #{order_id} has been received and is being prepared"),
        });
    }

    pub fn order_ready(&self, order_id: u64, contact: &str) {
        self.emit(Notification {
            order_id,
            contact: contact.to_string(),
            kind: NotificationKind::OrderReady,
            message: format!("Your order #{order_id} is ready for pickup!"),
        });
    }

    pub fn payment_confirmation(&self, order_id: u64, contact: &str, amount: Decimal, method: &str) {
        self.emit(Notification {
            order_id,
            contact: contact.to_string(),
            kind: NotificationKind::PaymentConfirmation,
            message: format!(
                "Payment of {} via {} was successful",
                format_amount(amount),
                method
            ),
        });
    }

    /// Everything emitted so far, in emission order
    pub fn sent(&self) -> Vec<Notification> {
        self.outbox.read().clone()
    }

    fn emit(&self, notification: Notification) {
        tracing::info!(
            order_id = notification.order_id,
            contact = %notification.contact,
            kind = ?notification.kind,
            message = %notification.message,
            "notification sent"
        );
        self.outbox.write().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbox_preserves_emission_order() {
        let service = NotificationService::new();
        service.order_confirmation(1000, "a@b.c");
        service.order_ready(1000, "a@b.c");
        service.payment_confirmation(1000, "a@b.c", Decimal::new(1249, 2), "Wallet");

        let sent = service.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].kind, NotificationKind::OrderConfirmation);
        assert_eq!(sent[1].kind, NotificationKind::OrderReady);
        assert_eq!(sent[2].kind, NotificationKind::PaymentConfirmation);
        assert_eq!(sent[2].message, "Payment of $12.49 via Wallet was successful");
    }

    #[test]
    fn test_messages_carry_order_id_and_contact() {
        let service = NotificationService::new();
        service.order_confirmation(1042, "customer@example.com");
        let sent = service.sent();
        assert_eq!(sent[0].order_id, 1042);
        assert_eq!(sent[0].contact, "customer@example.com");
        assert!(sent[0].message.contains("#1042"));
    }
}
