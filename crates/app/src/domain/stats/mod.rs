//! Stats

pub mod errors;
pub mod models;
pub mod service;

pub use errors::StatsServiceError;
pub use service::*;
