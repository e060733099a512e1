//! Fixed-point money helpers.
//!
//! All monetary values are [`Decimal`]s; binary floating point never touches
//! an amount.

use rust_decimal::Decimal;

/// Scale used for prices, subtotals and cart totals.
pub const CURRENCY_SCALE: u32 = 2;

/// Format a price-like amount with exactly two decimal places.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let mut amount = amount;

    amount.rescale(CURRENCY_SCALE);

    amount.to_string()
}

/// Format a stored amount without rounding it, padding to at least two
/// decimal places.
///
/// Discount and final amounts are persisted unrounded, so `2.999` stays
/// `2.999` while `3` becomes `3.00`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut amount = amount.normalize();

    if amount.scale() < CURRENCY_SCALE {
        amount.rescale(CURRENCY_SCALE);
    }

    amount.to_string()
}
