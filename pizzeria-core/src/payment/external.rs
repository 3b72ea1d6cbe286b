//! External payment backends (adaptees)
//!
//! Each backend keeps its own native call signature — emails for the wallet,
//! integer minor units for the card processor, tendered cash for the drawer.
//! Nothing outside the `payment` module talks to these directly; the
//! adapters in the parent module present the uniform contract.
//!
//! Backends are simulations: the wallet and card services always authorize,
//! the cash register actually accounts for its drawer.

use rust_decimal::Decimal;
use shared::money::format_amount;

// ============================================================================
// Wallet
// ============================================================================

/// Email-based wallet service
#[derive(Debug, Clone, Default)]
pub struct WalletApi;

impl WalletApi {
    pub fn service_name(&self) -> &'static str {
        "Wallet Payment Gateway"
    }

    /// Syntactic email check only
    pub fn verify_email(&self, email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }

    /// Simulated remote authorization — always succeeds
    pub fn send_payment(&self, email: &str, amount: Decimal) -> bool {
        tracing::debug!(
            email,
            amount = %format_amount(amount),
            "wallet payment authorized"
        );
        true
    }
}

// ============================================================================
// Card
// ============================================================================

/// Tokenized card processor; amounts are integer minor units
#[derive(Debug, Clone, Default)]
pub struct CardApi;

impl CardApi {
    pub fn gateway_name(&self) -> &'static str {
        "Card Payment Platform"
    }

    /// Token format check: prefixed and long enough
    pub fn validate_token(&self, token: &str) -> bool {
        token.starts_with("tok_") && token.len() > 10
    }

    /// Simulated charge — the processor approves
    pub fn charge(&self, token: &str, amount_in_cents: i64) -> bool {
        tracing::debug!(token, amount_in_cents, "card transaction approved");
        true
    }
}

// ============================================================================
// Cash register
// ============================================================================

/// In-house cash drawer with a running balance
#[derive(Debug, Clone)]
pub struct CashRegister {
    drawer: Decimal,
}

/// Starting float in the drawer
const DRAWER_OPENING_BALANCE: Decimal = Decimal::from_parts(50000, 0, 0, false, 2);

impl CashRegister {
    pub fn new() -> Self {
        Self {
            drawer: DRAWER_OPENING_BALANCE,
        }
    }

    pub fn verify_amount(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO
    }

    /// Accept tendered cash against an amount due
    ///
    /// Fails without side effect when tendered < due; otherwise the drawer
    /// is credited by the amount due (change goes back to the customer).
    pub fn accept_cash(&mut self, due: Decimal, tendered: Decimal) -> bool {
        if tendered < due {
            tracing::debug!(
                due = %format_amount(due),
                tendered = %format_amount(tendered),
                "insufficient cash received"
            );
            return false;
        }
        let change = tendered - due;
        self.drawer += due;
        tracing::debug!(
            due = %format_amount(due),
            tendered = %format_amount(tendered),
            change = %format_amount(change),
            "cash transaction complete"
        );
        true
    }

    pub fn drawer_balance(&self) -> Decimal {
        self.drawer
    }
}

impl Default for CashRegister {
    fn default() -> Self {
        Self::new()
    }
}
