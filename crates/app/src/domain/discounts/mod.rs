//! Discounts

pub mod codes;
pub mod errors;
pub(crate) mod ledger;
pub mod models;
mod repository;
pub mod service;

pub use errors::DiscountsServiceError;
pub use service::*;
