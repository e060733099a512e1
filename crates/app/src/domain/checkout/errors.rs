//! Checkout service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::discounts::DiscountsServiceError;

/// Unique constraint allowing one order per cart.
const ORDERS_CART_UUID_KEY: &str = "orders_cart_uuid_key";

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("cart not found")]
    CartNotFound,

    #[error("invalid discount code")]
    InvalidDiscountCode,

    #[error("cart already has an order")]
    DuplicateOrder,

    #[error("invalid data")]
    InvalidData,

    #[error("discount ledger error")]
    Discounts(#[source] DiscountsServiceError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutServiceError {
    fn from(error: Error) -> Self {
        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation
                if database_error.constraint() == Some(ORDERS_CART_UUID_KEY) =>
            {
                Self::DuplicateOrder
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<DiscountsServiceError> for CheckoutServiceError {
    fn from(error: DiscountsServiceError) -> Self {
        match error {
            DiscountsServiceError::InvalidDiscount => Self::InvalidDiscountCode,
            DiscountsServiceError::Sql(source) => Self::Sql(source),
            other => Self::Discounts(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::{CartsService, models::CartUuid},
            orders::{
                models::{NewOrder, OrderUuid},
                repository::PgOrdersRepository,
            },
        },
        test::{TestContext, helpers::create_product},
    };

    use super::*;

    fn new_order(cart: CartUuid, sequence: i64) -> NewOrder {
        NewOrder {
            uuid: OrderUuid::new(),
            cart_uuid: cart,
            sequence,
            discount_uuid: None,
            total: Decimal::ONE,
            discount_amount: Decimal::ZERO,
            final_amount: Decimal::ONE,
        }
    }

    #[tokio::test]
    async fn second_order_for_cart_maps_to_duplicate_order() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", Decimal::ONE).await?;
        let cart = ctx.carts.add_item("user-1", product.uuid).await?;
        let repository = PgOrdersRepository::new();
        let mut tx = ctx.db.begin_test_transaction().await;

        repository.create_order(&mut tx, new_order(cart.uuid, 1)).await?;

        let error = repository
            .create_order(&mut tx, new_order(cart.uuid, 2))
            .await
            .err()
            .ok_or("expected the second order for the cart to fail")?;

        let mapped = CheckoutServiceError::from(error);

        assert!(
            matches!(mapped, CheckoutServiceError::DuplicateOrder),
            "expected DuplicateOrder, got {mapped:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn reused_sequence_maps_to_storage_error() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", Decimal::ONE).await?;
        let first = ctx.carts.add_item("user-1", product.uuid).await?;
        let second = ctx.carts.add_item("user-2", product.uuid).await?;
        let repository = PgOrdersRepository::new();
        let mut tx = ctx.db.begin_test_transaction().await;

        repository.create_order(&mut tx, new_order(first.uuid, 1)).await?;

        let error = repository
            .create_order(&mut tx, new_order(second.uuid, 1))
            .await
            .err()
            .ok_or("expected a reused sequence number to fail")?;

        let mapped = CheckoutServiceError::from(error);

        assert!(
            matches!(mapped, CheckoutServiceError::Sql(_)),
            "expected Sql, got {mapped:?}"
        );

        Ok(())
    }

    #[test]
    fn invalid_discount_maps_to_invalid_discount_code() {
        let mapped = CheckoutServiceError::from(DiscountsServiceError::InvalidDiscount);

        assert!(
            matches!(mapped, CheckoutServiceError::InvalidDiscountCode),
            "expected InvalidDiscountCode, got {mapped:?}"
        );
    }
}
