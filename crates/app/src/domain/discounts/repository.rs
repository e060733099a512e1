//! Discounts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::discounts::models::{Discount, DiscountUuid, NewDiscount};

const FIND_UNUSED_DISCOUNT_BY_CODE_SQL: &str =
    include_str!("sql/find_unused_discount_by_code.sql");
const CREATE_DISCOUNT_SQL: &str = include_str!("sql/create_discount.sql");
const REDEEM_DISCOUNT_SQL: &str = include_str!("sql/redeem_discount.sql");
const LIST_ACTIVE_DISCOUNTS_SQL: &str = include_str!("sql/list_active_discounts.sql");
const COUNT_DISCOUNTS_SQL: &str = include_str!("sql/count_discounts.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDiscountsRepository;

impl PgDiscountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_unused_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<Discount>, sqlx::Error> {
        query_as::<Postgres, Discount>(FIND_UNUSED_DISCOUNT_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Insert a discount, returning `None` when the code is already taken.
    pub(crate) async fn create_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: NewDiscount,
    ) -> Result<Option<Discount>, sqlx::Error> {
        query_as::<Postgres, Discount>(CREATE_DISCOUNT_SQL)
            .bind(discount.uuid.into_uuid())
            .bind(discount.code)
            .bind(discount.percentage)
            .bind(discount.milestone_sequence)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Flip `is_used` from false to true, returning `None` if it was already set.
    pub(crate) async fn redeem_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountUuid,
    ) -> Result<Option<Discount>, sqlx::Error> {
        query_as::<Postgres, Discount>(REDEEM_DISCOUNT_SQL)
            .bind(discount.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_active_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Discount>, sqlx::Error> {
        query_as::<Postgres, Discount>(LIST_ACTIVE_DISCOUNTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_DISCOUNTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Discount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: DiscountUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            percentage: row.try_get("percentage")?,
            is_used: row.try_get("is_used")?,
            milestone_sequence: row.try_get("milestone_sequence")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("used_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
