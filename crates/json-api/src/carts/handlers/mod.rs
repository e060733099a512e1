//! Cart Handlers

pub(crate) mod add;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{
    domain::carts::models::{Cart, CartItem, DiscountHint},
    money::format_price,
};

use crate::products::ProductResponse;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: Uuid,

    /// The user owning the cart
    pub user_id: String,

    /// The items in the cart
    pub items: Vec<CartItemResponse>,

    /// Sum of item subtotals
    pub total: String,

    /// Discount last applied to this cart at checkout
    pub discount: Option<CartDiscountResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = format_price(cart.total());

        Self {
            id: cart.uuid.into_uuid(),
            user_id: cart.user_id,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total,
            discount: cart.discount_hint.map(CartDiscountResponse::from),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub id: Uuid,

    /// The product in this line
    pub product: ProductResponse,

    /// Units of the product
    pub quantity: u32,

    /// Price times quantity
    pub subtotal: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let subtotal = format_price(item.subtotal());

        Self {
            id: item.uuid.into_uuid(),
            product: item.product.into(),
            quantity: item.quantity,
            subtotal,
        }
    }
}

/// Discount shown on a cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartDiscountResponse {
    pub id: Uuid,
    pub code: String,
}

impl From<DiscountHint> for CartDiscountResponse {
    fn from(hint: DiscountHint) -> Self {
        Self {
            id: hint.uuid.into_uuid(),
            code: hint.code,
        }
    }
}
