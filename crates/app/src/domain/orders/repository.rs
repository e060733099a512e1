//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    carts::models::CartUuid,
    discounts::models::DiscountUuid,
    orders::models::{NewOrder, Order, OrderTotals, OrderUuid},
};

const NEXT_ORDER_SEQUENCE_SQL: &str = include_str!("sql/next_order_sequence.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const FIND_ORDER_BY_CART_SQL: &str = include_str!("sql/find_order_by_cart.sql");
const ORDER_TOTALS_SQL: &str = include_str!("sql/order_totals.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Claim the next order sequence number. The counter row stays locked
    /// until the transaction ends, and a rollback returns the number.
    pub(crate) async fn next_sequence(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(NEXT_ORDER_SEQUENCE_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.cart_uuid.into_uuid())
            .bind(order.sequence)
            .bind(order.discount_uuid.map(DiscountUuid::into_uuid))
            .bind(order.total)
            .bind(order.discount_amount)
            .bind(order.final_amount)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_order_by_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Option<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(FIND_ORDER_BY_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn order_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<OrderTotals, sqlx::Error> {
        let row = query(ORDER_TOTALS_SQL).fetch_one(&mut **tx).await?;

        Ok(OrderTotals {
            orders_count: row.try_get("orders_count")?,
            sales: row.try_get("sales")?,
            discount_amount: row.try_get("discount_amount")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: CartUuid::from_uuid(row.try_get("cart_uuid")?),
            sequence: row.try_get("sequence")?,
            discount_uuid: row
                .try_get::<Option<Uuid>, _>("discount_uuid")?
                .map(DiscountUuid::from_uuid),
            total: row.try_get("total")?,
            discount_amount: row.try_get("discount_amount")?,
            final_amount: row.try_get("final_amount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
