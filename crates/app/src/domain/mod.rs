//! Storefront Domain Concerns

pub mod carts;
pub mod checkout;
pub mod discounts;
pub mod orders;
pub mod products;
pub mod stats;
