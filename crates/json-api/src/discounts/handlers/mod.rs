//! Discount Handlers

pub(crate) mod generate;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{domain::discounts::models::Discount, money::format_price};

/// Discount Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountResponse {
    /// The unique identifier of the discount
    pub id: Uuid,

    /// Code customers enter at checkout
    pub code: String,

    /// Percentage off, with two decimal places
    pub percentage: String,

    pub is_used: bool,

    /// RFC 3339 issue time
    pub created_at: String,
}

impl From<Discount> for DiscountResponse {
    fn from(discount: Discount) -> Self {
        Self {
            id: discount.uuid.into_uuid(),
            code: discount.code,
            percentage: format_price(discount.percentage),
            is_used: discount.is_used,
            created_at: discount.created_at.to_string(),
        }
    }
}
