//! Order amount calculation.

use rust_decimal::Decimal;

/// Amounts snapshotted onto an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAmounts {
    pub total: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
}

/// `total * percentage / 100`, unrounded.
#[must_use]
pub fn discount_amount(total: Decimal, percentage: Decimal) -> Decimal {
    total * percentage / Decimal::ONE_HUNDRED
}

/// Price an order from its cart total and the redeemed discount percentage.
#[must_use]
pub fn order_amounts(total: Decimal, percentage: Option<Decimal>) -> OrderAmounts {
    let discount_amount = percentage.map_or(Decimal::ZERO, |percentage| {
        discount_amount(total, percentage)
    });

    OrderAmounts {
        total,
        discount_amount,
        final_amount: total - discount_amount,
    }
}
