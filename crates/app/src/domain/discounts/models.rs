//! Discount Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Discount UUID
pub type DiscountUuid = TypedUuid<Discount>;

/// Percentage applied to codes the ledger generates (10.00%).
pub const DEFAULT_PERCENTAGE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Discount Model
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub uuid: DiscountUuid,
    pub code: String,
    pub percentage: Decimal,
    pub is_used: bool,
    /// Order sequence number that triggered issuance, for milestone codes.
    pub milestone_sequence: Option<i64>,
    pub created_at: Timestamp,
    pub used_at: Option<Timestamp>,
}

/// New Discount Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub uuid: DiscountUuid,
    pub code: String,
    pub percentage: Decimal,
    pub milestone_sequence: Option<i64>,
}
