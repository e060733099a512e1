//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        discounts::{DiscountsServiceError, ledger::DiscountLedger, models::Discount},
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, Product, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price,
            description: String::new(),
        })
        .await
}

/// Committed ledger lookup of an unused code.
pub(crate) async fn find_valid_discount(
    ctx: &TestContext,
    code: &str,
) -> Result<Discount, DiscountsServiceError> {
    let mut tx = ctx.db.pool().begin().await?;
    let discount = DiscountLedger::new().find_valid(&mut tx, code).await?;

    tx.commit().await?;

    Ok(discount)
}

pub(crate) async fn active_discounts(
    ctx: &TestContext,
) -> Result<Vec<Discount>, DiscountsServiceError> {
    let mut tx = ctx.db.pool().begin().await?;
    let discounts = DiscountLedger::new().list_active(&mut tx).await?;

    tx.commit().await?;

    Ok(discounts)
}

/// Issue and commit the milestone code for `order_sequence` outside checkout.
pub(crate) async fn issue_milestone_discount(
    ctx: &TestContext,
    order_sequence: i64,
) -> Result<Option<Discount>, DiscountsServiceError> {
    let mut tx = ctx.db.pool().begin().await?;
    let issued = DiscountLedger::new()
        .issue_on_milestone(&mut tx, order_sequence)
        .await?;

    tx.commit().await?;

    Ok(issued)
}
