//! Discounts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::discounts::{errors::DiscountsServiceError, ledger::DiscountLedger, models::Discount},
};

pub use crate::domain::discounts::ledger::{MAX_CODE_ATTEMPTS, MILESTONE_INTERVAL, is_milestone};

#[derive(Debug, Clone)]
pub struct PgDiscountsService {
    db: Db,
    ledger: DiscountLedger,
}

impl PgDiscountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            ledger: DiscountLedger::new(),
        }
    }
}

#[async_trait]
impl DiscountsService for PgDiscountsService {
    async fn generate_discount(&self) -> Result<Discount, DiscountsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let discount = self.ledger.issue(&mut tx, None).await?;

        tx.commit().await?;

        info!(code = %discount.code, "discount generated");

        Ok(discount)
    }

    async fn generate_discounts(&self, count: usize) -> Result<Vec<Discount>, DiscountsServiceError> {
        let mut tx = self.db.begin_transaction().await?;
        let mut discounts = Vec::with_capacity(count);

        for _ in 0..count {
            discounts.push(self.ledger.issue(&mut tx, None).await?);
        }

        tx.commit().await?;

        info!(count, "discount batch generated");

        Ok(discounts)
    }
}

#[automock]
#[async_trait]
pub trait DiscountsService: Send + Sync {
    /// Generate one unused discount with a fresh random code.
    async fn generate_discount(&self) -> Result<Discount, DiscountsServiceError>;

    /// Generate `count` unused discounts in a single transaction.
    async fn generate_discounts(&self, count: usize) -> Result<Vec<Discount>, DiscountsServiceError>;
}
