//! Add To Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::models::ProductUuid;

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// The user whose cart receives the item
    pub user_id: String,

    /// The product to add one unit of
    pub product_id: Uuid,
}

/// Add To Cart Handler
///
/// Adds one unit of a product to the user's cart, creating the cart on first use.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();

    let cart = state
        .app
        .carts
        .add_item(&request.user_id, ProductUuid::from_uuid(request.product_id))
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart, make_item, make_product};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_returns_updated_cart() -> TestResult {
        let product = make_product("View Product", Decimal::new(29_99, 2));
        let product_id = product.uuid;
        let cart = make_cart("user-456", vec![make_item(product, 1)]);

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |user_id, product| user_id == "user-456" && *product == product_id)
            .return_once(move |_, _| Ok(cart));

        carts.expect_get_cart().never();

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "user_id": "user-456", "product_id": product_id.into_uuid() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.total, "29.99");
        assert_eq!(
            body.items.first().map(|item| item.product.id),
            Some(product_id.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        carts.expect_get_cart().never();

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "user_id": "user-1", "product_id": Uuid::now_v7() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_with_invalid_user_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::InvalidData));

        carts.expect_get_cart().never();

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "user_id": "", "product_id": Uuid::now_v7() }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
