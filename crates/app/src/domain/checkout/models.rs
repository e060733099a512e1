//! Checkout Models

/// A request to turn a user's cart into an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub user_id: String,
    /// Code to redeem. `None` and `Some("")` both mean no discount.
    pub discount_code: Option<String>,
}

impl CheckoutRequest {
    /// The discount code, if one was actually supplied.
    #[must_use]
    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref().filter(|code| !code.is_empty())
    }
}
