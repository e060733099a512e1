//! Checkout

pub mod errors;
pub mod models;
pub mod pricing;
pub mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
