//! Checkout service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Acquire, Postgres, Transaction};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            models::CartItem,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        checkout::{errors::CheckoutServiceError, models::CheckoutRequest, pricing},
        discounts::{DiscountsServiceError, ledger::DiscountLedger, models::Discount},
        orders::{
            models::{NewOrder, Order, OrderUuid},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    orders_repository: PgOrdersRepository,
    ledger: DiscountLedger,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            ledger: DiscountLedger::new(),
        }
    }

    /// Issue the milestone discount for `order` inside a savepoint. A failure
    /// is logged and rolled back without affecting the order.
    async fn reward_milestone(&self, tx: &mut Transaction<'_, Postgres>, order: &Order) {
        match self.try_reward_milestone(tx, order.sequence).await {
            Ok(Some(discount)) => {
                info!(
                    sequence = order.sequence,
                    code = %discount.code,
                    "milestone discount issued"
                );
            }
            Ok(None) => {}
            Err(error) => {
                warn!(
                    sequence = order.sequence,
                    error = %error,
                    "milestone discount generation failed"
                );
            }
        }
    }

    async fn try_reward_milestone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sequence: i64,
    ) -> Result<Option<Discount>, DiscountsServiceError> {
        let mut savepoint = tx.begin().await?;

        match self.ledger.issue_on_milestone(&mut savepoint, sequence).await {
            Ok(issued) => {
                savepoint.commit().await?;

                Ok(issued)
            }
            Err(error) => {
                savepoint.rollback().await?;

                Err(error)
            }
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn checkout(&self, request: CheckoutRequest) -> Result<Order, CheckoutServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .carts_repository
            .lock_cart_by_user(&mut tx, &request.user_id)
            .await?
            .ok_or(CheckoutServiceError::CartNotFound)?;

        if self
            .orders_repository
            .find_order_by_cart(&mut tx, cart.uuid)
            .await?
            .is_some()
        {
            return Err(CheckoutServiceError::DuplicateOrder);
        }

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.uuid)
            .await?;

        let total = items.iter().map(CartItem::subtotal).sum();

        let discount = match request.discount_code() {
            Some(code) => {
                let found = self.ledger.find_valid(&mut tx, code).await?;
                let redeemed = self.ledger.redeem(&mut tx, found.uuid).await?;

                self.carts_repository
                    .set_discount_hint(&mut tx, cart.uuid, redeemed.uuid)
                    .await?;

                Some(redeemed)
            }
            None => None,
        };

        let amounts = pricing::order_amounts(total, discount.as_ref().map(|d| d.percentage));

        let sequence = self.orders_repository.next_sequence(&mut tx).await?;

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                NewOrder {
                    uuid: OrderUuid::new(),
                    cart_uuid: cart.uuid,
                    sequence,
                    discount_uuid: discount.as_ref().map(|d| d.uuid),
                    total: amounts.total,
                    discount_amount: amounts.discount_amount,
                    final_amount: amounts.final_amount,
                },
            )
            .await?;

        self.reward_milestone(&mut tx, &order).await;

        tx.commit().await?;

        info!(
            order = %order.uuid,
            sequence = order.sequence,
            discounted = order.discount_uuid.is_some(),
            "order placed"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Turn the user's cart into an order, redeeming the discount code if one
    /// is given. Either everything happens or nothing does.
    async fn checkout(&self, request: CheckoutRequest) -> Result<Order, CheckoutServiceError>;
}
