//! Get Cart Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
};

/// Get Cart Handler
///
/// Returns the cart belonging to `user_id`.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "The user's cart"),
        (status_code = StatusCode::NOT_FOUND, description = "User has no cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing user_id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user_id: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;

    let user_id = user_id
        .into_inner()
        .filter(|user_id| !user_id.is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("user_id is required"))?;

    let cart = state
        .app
        .carts
        .get_cart(&user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
