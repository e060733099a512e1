//! Stats Models

use rust_decimal::Decimal;

use crate::domain::discounts::models::Discount;

/// Store-wide rollup for the admin view.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_orders: i64,
    /// Sum of order final amounts.
    pub total_sales: Decimal,
    /// Every discount ever issued, used or not.
    pub total_discounts: i64,
    pub total_discount_amount: Decimal,
    pub active_discounts: Vec<Discount>,
}
