//! Discount ledger operations that run inside a caller's transaction.
//!
//! Both the discounts service and checkout drive the ledger, so every method
//! takes the open transaction rather than starting its own.

use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::domain::discounts::{
    codes,
    errors::DiscountsServiceError,
    models::{DEFAULT_PERCENTAGE, Discount, DiscountUuid, NewDiscount},
    repository::PgDiscountsRepository,
};

/// Number of fresh codes tried before giving up on a collision streak.
pub const MAX_CODE_ATTEMPTS: usize = 16;

/// Every order whose sequence number is a multiple of this issues a new code.
pub const MILESTONE_INTERVAL: i64 = 5;

/// Whether the order with this sequence number earns a milestone discount.
#[must_use]
pub fn is_milestone(order_sequence: i64) -> bool {
    order_sequence > 0 && order_sequence % MILESTONE_INTERVAL == 0
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DiscountLedger {
    repository: PgDiscountsRepository,
}

impl DiscountLedger {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            repository: PgDiscountsRepository::new(),
        }
    }

    /// Issue a new unused discount with a random unique code.
    pub(crate) async fn issue(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        milestone_sequence: Option<i64>,
    ) -> Result<Discount, DiscountsServiceError> {
        self.issue_with(tx, milestone_sequence, codes::generate_code)
            .await
    }

    /// Issue a discount drawing candidate codes from `next_code` until one is free.
    pub(crate) async fn issue_with<F>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        milestone_sequence: Option<i64>,
        mut next_code: F,
    ) -> Result<Discount, DiscountsServiceError>
    where
        F: FnMut() -> String + Send,
    {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let candidate = NewDiscount {
                uuid: DiscountUuid::new(),
                code: next_code(),
                percentage: DEFAULT_PERCENTAGE,
                milestone_sequence,
            };

            if let Some(discount) = self.repository.create_discount(tx, candidate).await? {
                return Ok(discount);
            }

            debug!(attempt, "discount code collision, regenerating");
        }

        Err(DiscountsServiceError::CodeSpaceExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Find the unused discount with exactly this code.
    pub(crate) async fn find_valid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Discount, DiscountsServiceError> {
        self.repository
            .find_unused_by_code(tx, code)
            .await?
            .ok_or(DiscountsServiceError::InvalidDiscount)
    }

    /// Mark the discount used. Losing the race to another redemption is
    /// reported as [`DiscountsServiceError::InvalidDiscount`].
    pub(crate) async fn redeem(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountUuid,
    ) -> Result<Discount, DiscountsServiceError> {
        self.repository
            .redeem_discount(tx, discount)
            .await?
            .ok_or(DiscountsServiceError::InvalidDiscount)
    }

    /// Issue the milestone code for `order_sequence`, if it is a milestone.
    pub(crate) async fn issue_on_milestone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_sequence: i64,
    ) -> Result<Option<Discount>, DiscountsServiceError> {
        if !is_milestone(order_sequence) {
            return Ok(None);
        }

        self.issue(tx, Some(order_sequence)).await.map(Some)
    }

    pub(crate) async fn list_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Discount>, DiscountsServiceError> {
        Ok(self.repository.list_active_discounts(tx).await?)
    }

    pub(crate) async fn count(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, DiscountsServiceError> {
        Ok(self.repository.count_discounts(tx).await?)
    }
}
