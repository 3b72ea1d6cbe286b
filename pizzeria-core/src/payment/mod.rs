//! Payment gateway abstraction
//!
//! Wraps three heterogeneous backends behind one
//! `(amount, credential) -> bool` contract. Adapters never expose the
//! backend's native signature; variant selection happens at construction
//! time and dispatch is static via `enum_dispatch`.
//!
//! The contract does not order calls itself: `charge` is only meaningful
//! after `validate` returned true, and the orchestrator owns that sequencing.

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::money::parse_amount;

pub mod external;

use external::{CardApi, CashRegister, WalletApi};

/// Uniform payment contract every adapter presents
#[enum_dispatch]
pub trait PaymentGateway {
    /// Payment method name for receipts and notifications
    fn method_name(&self) -> &'static str;

    /// Check the credential shape without charging anything
    fn validate(&self, credential: &str) -> bool;

    /// Charge the amount against the credential; false means declined
    /// and guarantees no side effect
    fn charge(&mut self, amount: Decimal, credential: &str) -> bool;
}

/// Gateway adapter variants — the ONLY place that knows which backend
/// sits behind which payment method
#[enum_dispatch(PaymentGateway)]
#[derive(Debug, Clone)]
pub enum GatewayAdapter {
    Wallet(WalletAdapter),
    Card(CardAdapter),
    Cash(CashAdapter),
}

impl GatewayAdapter {
    pub fn wallet() -> Self {
        GatewayAdapter::Wallet(WalletAdapter::new())
    }

    pub fn card() -> Self {
        GatewayAdapter::Card(CardAdapter::new())
    }

    pub fn cash() -> Self {
        GatewayAdapter::Cash(CashAdapter::new())
    }
}

/// Convert a monetary amount to integer minor units for the card backend
fn to_minor_units(amount: Decimal) -> Option<i64> {
    (amount * Decimal::ONE_HUNDRED).to_i64()
}

// ============================================================================
// Wallet adapter
// ============================================================================

/// Adapts the email-based wallet service
#[derive(Debug, Clone, Default)]
pub struct WalletAdapter {
    backend: WalletApi,
}

impl WalletAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentGateway for WalletAdapter {
    fn method_name(&self) -> &'static str {
        "Wallet"
    }

    fn validate(&self, credential: &str) -> bool {
        self.backend.verify_email(credential)
    }

    fn charge(&mut self, amount: Decimal, credential: &str) -> bool {
        self.backend.send_payment(credential, amount)
    }
}

// ============================================================================
// Card adapter
// ============================================================================

/// Adapts the tokenized card processor (expects minor units, not decimals)
#[derive(Debug, Clone, Default)]
pub struct CardAdapter {
    backend: CardApi,
}

impl CardAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentGateway for CardAdapter {
    fn method_name(&self) -> &'static str {
        "Card"
    }

    fn validate(&self, credential: &str) -> bool {
        self.backend.validate_token(credential)
    }

    fn charge(&mut self, amount: Decimal, credential: &str) -> bool {
        let Some(cents) = to_minor_units(amount) else {
            return false;
        };
        self.backend.charge(credential, cents)
    }
}

// ============================================================================
// Cash adapter
// ============================================================================

/// Adapts the cash drawer; the credential is the cash tendered as text
#[derive(Debug, Clone, Default)]
pub struct CashAdapter {
    backend: CashRegister,
}

impl CashAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawer balance, exposed for reconciliation
    pub fn drawer_balance(&self) -> Decimal {
        self.backend.drawer_balance()
    }
}

impl PaymentGateway for CashAdapter {
    fn method_name(&self) -> &'static str {
        "Cash"
    }

    fn validate(&self, credential: &str) -> bool {
        parse_amount(credential)
            .map(|amount| self.backend.verify_amount(amount))
            .unwrap_or(false)
    }

    fn charge(&mut self, amount: Decimal, credential: &str) -> bool {
        let Some(tendered) = parse_amount(credential) else {
            return false;
        };
        self.backend.accept_cash(amount, tendered)
    }
}
