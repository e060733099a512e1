//! Checkout Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{
    domain::{checkout::models::CheckoutRequest, orders::models::Order},
    money::{format_amount, format_price},
};

use crate::{
    checkout::errors::{into_status_error, outcome},
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCheckoutRequest {
    /// The user whose cart is checked out
    pub user_id: String,

    /// Optional single-use discount code
    #[serde(default)]
    pub discount_code: Option<String>,
}

impl From<CreateCheckoutRequest> for CheckoutRequest {
    fn from(request: CreateCheckoutRequest) -> Self {
        Self {
            user_id: request.user_id,
            discount_code: request.discount_code,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: Uuid,

    /// Cart total before discount
    pub total: String,

    /// Amount taken off by the discount, unrounded
    pub discount_amount: String,

    /// Amount charged, unrounded
    pub final_amount: String,

    /// RFC 3339 creation time
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            total: format_price(order.total),
            discount_amount: format_amount(order.discount_amount),
            final_amount: format_amount(order.final_amount),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Checkout Handler
///
/// Turns the user's cart into an order, redeeming the discount code if given.
#[endpoint(
    tags("checkout"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid discount code"),
        (status_code = StatusCode::CONFLICT, description = "Cart already checked out"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state()?;

    let order = match state.app.checkout.checkout(json.into_inner().into()).await {
        Ok(order) => order,
        Err(error) => {
            record_checkout(outcome(&error));

            return Err(into_status_error(error));
        }
    };

    record_checkout(CheckoutOutcome::Placed);

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
