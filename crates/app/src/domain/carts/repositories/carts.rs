//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    carts::models::{Cart, CartUuid, DiscountHint},
    discounts::models::DiscountUuid,
};

const FIND_CART_BY_USER_SQL: &str = include_str!("../sql/find_cart_by_user.sql");
const LOCK_CART_BY_USER_SQL: &str = include_str!("../sql/lock_cart_by_user.sql");
const GET_OR_CREATE_CART_SQL: &str = include_str!("../sql/get_or_create_cart.sql");
const SET_CART_DISCOUNT_SQL: &str = include_str!("../sql/set_cart_discount.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_cart_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: &str,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_BY_USER_SQL)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Like [`Self::find_cart_by_user`], but holds a row lock until the
    /// transaction ends.
    pub(crate) async fn lock_cart_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: &str,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(LOCK_CART_BY_USER_SQL)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Return the user's cart, creating it under `cart` if there is none.
    /// Either way the cart row stays locked for the rest of the transaction.
    pub(crate) async fn get_or_create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        user_id: &str,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_OR_CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(user_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_discount_hint(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        discount: DiscountUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_CART_DISCOUNT_SQL)
            .bind(cart.into_uuid())
            .bind(discount.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount_uuid: Option<Uuid> = row.try_get("discount_uuid")?;
        let discount_code: Option<String> = row.try_get("discount_code")?;

        let discount_hint = discount_uuid
            .zip(discount_code)
            .map(|(uuid, code)| DiscountHint {
                uuid: DiscountUuid::from_uuid(uuid),
                code,
            });

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_id: row.try_get("user_id")?,
            discount_hint,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
