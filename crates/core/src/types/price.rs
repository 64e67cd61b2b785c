//! Decimal money helpers.
//!
//! Amounts are held as [`Decimal`] in the store's single currency so that
//! totals never pick up floating point drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimal places (e.g., `1000.00`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
