//! Stats service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::discounts::DiscountsServiceError;

#[derive(Debug, Error)]
pub enum StatsServiceError {
    #[error("discount ledger error")]
    Discounts(#[source] DiscountsServiceError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StatsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<DiscountsServiceError> for StatsServiceError {
    fn from(error: DiscountsServiceError) -> Self {
        match error {
            DiscountsServiceError::Sql(source) => Self::Sql(source),
            other => Self::Discounts(other),
        }
    }
}
