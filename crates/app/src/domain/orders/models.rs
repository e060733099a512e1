//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{carts::models::CartUuid, discounts::models::DiscountUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// Amounts are snapshots taken at checkout and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub cart_uuid: CartUuid,
    /// Position of this order among all orders ever placed, starting at 1.
    pub sequence: i64,
    pub discount_uuid: Option<DiscountUuid>,
    pub total: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub created_at: Timestamp,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub cart_uuid: CartUuid,
    pub sequence: i64,
    pub discount_uuid: Option<DiscountUuid>,
    pub total: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
}

/// Order aggregates across the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotals {
    pub orders_count: i64,
    pub sales: Decimal,
    pub discount_amount: Decimal,
}
