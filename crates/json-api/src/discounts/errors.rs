//! Discount Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::discounts::DiscountsServiceError;

pub(crate) fn into_status_error(error: DiscountsServiceError) -> StatusError {
    match error {
        DiscountsServiceError::InvalidDiscount => {
            StatusError::bad_request().brief("Invalid discount code")
        }
        DiscountsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Discount already exists")
        }
        DiscountsServiceError::CodeSpaceExhausted { attempts } => {
            error!(attempts, "no free discount code found");

            StatusError::service_unavailable().brief("Could not allocate a discount code")
        }
        DiscountsServiceError::Sql(source) => {
            error!("discount storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
