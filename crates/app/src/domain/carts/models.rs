//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{discounts::models::DiscountUuid, products::models::Product},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Longest user identifier a cart can be keyed by.
pub const MAX_USER_ID_LENGTH: usize = 100;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub user_id: String,
    /// Last discount applied to this cart. Display only; checkout never reads it.
    pub discount_hint: Option<DiscountHint>,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Sum of item subtotals; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

/// Discount shown alongside a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountHint {
    pub uuid: DiscountUuid,
    pub code: String,
}

/// `CartItem` Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub product: Product,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItem {
    /// Product price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
