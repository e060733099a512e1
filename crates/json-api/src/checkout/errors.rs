//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::checkout::CheckoutServiceError;

use crate::observability::CheckoutOutcome;

pub(crate) fn outcome(error: &CheckoutServiceError) -> CheckoutOutcome {
    match error {
        CheckoutServiceError::CartNotFound => CheckoutOutcome::CartNotFound,
        CheckoutServiceError::InvalidDiscountCode => CheckoutOutcome::InvalidDiscountCode,
        CheckoutServiceError::DuplicateOrder => CheckoutOutcome::DuplicateOrder,
        CheckoutServiceError::InvalidData
        | CheckoutServiceError::Discounts(_)
        | CheckoutServiceError::Sql(_) => CheckoutOutcome::Failed,
    }
}

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::CartNotFound => StatusError::not_found().brief("Cart not found"),
        CheckoutServiceError::InvalidDiscountCode => {
            StatusError::bad_request().brief("Invalid discount code")
        }
        CheckoutServiceError::DuplicateOrder => {
            StatusError::conflict().brief("Cart has already been checked out")
        }
        CheckoutServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid checkout payload")
        }
        CheckoutServiceError::Discounts(source) => {
            error!("checkout discount failure: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Sql(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
