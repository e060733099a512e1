//! Discounts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscountsServiceError {
    /// No unused discount matches the code, or it was redeemed concurrently.
    #[error("invalid discount code")]
    InvalidDiscount,

    #[error("discount already exists")]
    AlreadyExists,

    #[error("could not generate a unique discount code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for DiscountsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::InvalidDiscount;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
