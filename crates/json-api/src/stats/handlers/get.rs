//! Get Stats Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use storefront_app::{domain::stats::models::Stats, money::format_amount};

use crate::{discounts::DiscountResponse, extensions::*, stats::errors::into_status_error};

/// Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatsResponse {
    /// Orders ever placed
    pub total_orders: i64,

    /// Sum of order final amounts
    pub total_sales: String,

    /// Discount codes ever issued
    pub total_discounts: i64,

    /// Sum of order discount amounts
    pub total_discount_amount: String,

    /// Codes that can still be redeemed, newest first
    pub active_discounts: Vec<DiscountResponse>,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_orders: stats.total_orders,
            total_sales: format_amount(stats.total_sales),
            total_discounts: stats.total_discounts,
            total_discount_amount: format_amount(stats.total_discount_amount),
            active_discounts: stats
                .active_discounts
                .into_iter()
                .map(DiscountResponse::from)
                .collect(),
        }
    }
}

/// Get Stats Handler
#[endpoint(
    tags("admin"),
    summary = "Store Statistics",
    responses(
        (status_code = StatusCode::OK, description = "Order and discount totals"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatsResponse>, StatusError> {
    let state = depot.state()?;

    let stats = state
        .app
        .stats
        .get_stats()
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
