//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartItemUuid, CartUuid, MAX_USER_ID_LENGTH},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        products::{models::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self
            .carts_repository
            .find_cart_by_user(&mut tx, user_id)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn add_item(
        &self,
        user_id: &str,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        validate_user_id(user_id)?;

        let mut tx = self.db.begin_transaction().await?;

        self.products_repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self
            .carts_repository
            .get_or_create_cart(&mut tx, CartUuid::new(), user_id)
            .await?;

        self.items_repository
            .increment_cart_item(&mut tx, cart.uuid, product, CartItemUuid::new())
            .await?;

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }
}

fn validate_user_id(user_id: &str) -> Result<(), CartsServiceError> {
    if user_id.is_empty() || user_id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(CartsServiceError::InvalidData);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart with its items.
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartsServiceError>;

    /// Add one unit of a product to the user's cart, creating the cart if needed.
    async fn add_item(&self, user_id: &str, product: ProductUuid)
    -> Result<Cart, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_product};

    use super::*;

    #[tokio::test]
    async fn get_cart_unknown_user_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.carts.get_cart("nobody").await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_item_creates_cart_with_single_unit() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "View Product", Decimal::new(29_99, 2)).await?;

        let cart = ctx.carts.add_item("user-456", product.uuid).await?;

        assert_eq!(cart.user_id, "user-456");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.quantity), Some(1));
        assert_eq!(
            cart.items.first().map(|item| item.product.name.as_str()),
            Some("View Product")
        );
        assert_eq!(cart.total(), Decimal::new(29_99, 2));
        assert!(cart.discount_hint.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_product_twice_increments_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Notebook", Decimal::new(4_50, 2)).await?;

        let first = ctx.carts.add_item("user-1", product.uuid).await?;
        let second = ctx.carts.add_item("user-1", product.uuid).await?;

        assert_eq!(first.uuid, second.uuid);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items.first().map(|item| item.quantity), Some(2));
        assert_eq!(second.total(), Decimal::new(9_00, 2));

        Ok(())
    }

    #[tokio::test]
    async fn distinct_products_become_distinct_items() -> TestResult {
        let ctx = TestContext::new().await;
        let pen = create_product(&ctx, "Pen", Decimal::new(1_25, 2)).await?;
        let ink = create_product(&ctx, "Ink", Decimal::new(6_00, 2)).await?;

        ctx.carts.add_item("user-1", pen.uuid).await?;
        let cart = ctx.carts.add_item("user-1", ink.uuid).await?;

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), Decimal::new(7_25, 2));

        let fetched = ctx.carts.get_cart("user-1").await?;

        assert_eq!(fetched.items, cart.items);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_unknown_product_returns_product_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.carts.add_item("user-1", ProductUuid::new()).await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );

        let cart = ctx.carts.get_cart("user-1").await;

        assert!(
            matches!(cart, Err(CartsServiceError::NotFound)),
            "expected no cart to be created, got {cart:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_rejects_empty_user_id() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Pen", Decimal::new(1_25, 2)).await?;

        let result = ctx.carts.add_item("", product.uuid).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_do_not_lose_updates() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Sticker", Decimal::new(0_50, 2)).await?;

        let (a, b, c, d) = tokio::join!(
            ctx.carts.add_item("racer", product.uuid),
            ctx.carts.add_item("racer", product.uuid),
            ctx.carts.add_item("racer", product.uuid),
            ctx.carts.add_item("racer", product.uuid),
        );

        for outcome in [a, b, c, d] {
            outcome?;
        }

        let cart = ctx.carts.get_cart("racer").await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.quantity), Some(4));

        Ok(())
    }

    #[test]
    fn user_id_length_is_bounded() {
        assert!(validate_user_id(&"u".repeat(MAX_USER_ID_LENGTH)).is_ok());
        assert!(validate_user_id(&"u".repeat(MAX_USER_ID_LENGTH + 1)).is_err());
    }
}
