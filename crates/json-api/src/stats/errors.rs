//! Stats Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::stats::StatsServiceError;

pub(crate) fn into_status_error(error: StatsServiceError) -> StatusError {
    match error {
        StatsServiceError::Discounts(source) => {
            error!("stats discount failure: {source}");

            StatusError::internal_server_error()
        }
        StatsServiceError::Sql(source) => {
            error!("stats storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
