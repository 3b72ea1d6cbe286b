//! Money helpers using rust_decimal for precision
//!
//! All monetary values in the workspace are `Decimal` end to end; this
//! module centralizes rounding, formatting and parsing so every component
//! agrees on the same 2-decimal-place representation.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a monetary value to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value for customer-facing text, e.g. `$12.49`
pub fn format_amount(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

/// Parse a decimal amount from free-form text (cash credentials)
///
/// Returns `None` for anything that is not a plain decimal number.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str_exact(text.trim()).ok()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
