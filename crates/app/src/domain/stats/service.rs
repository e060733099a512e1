//! Stats service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        discounts::ledger::DiscountLedger,
        orders::repository::PgOrdersRepository,
        stats::{errors::StatsServiceError, models::Stats},
    },
};

#[derive(Debug, Clone)]
pub struct PgStatsService {
    db: Db,
    orders_repository: PgOrdersRepository,
    ledger: DiscountLedger,
}

impl PgStatsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            ledger: DiscountLedger::new(),
        }
    }
}

#[async_trait]
impl StatsService for PgStatsService {
    async fn get_stats(&self) -> Result<Stats, StatsServiceError> {
        let mut tx = self.db.begin_read_only_snapshot().await?;

        let totals = self.orders_repository.order_totals(&mut tx).await?;
        let total_discounts = self.ledger.count(&mut tx).await?;
        let active_discounts = self.ledger.list_active(&mut tx).await?;

        tx.commit().await?;

        Ok(Stats {
            total_orders: totals.orders_count,
            total_sales: totals.sales,
            total_discounts,
            total_discount_amount: totals.discount_amount,
            active_discounts,
        })
    }
}

#[automock]
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Order and discount totals across the whole store.
    async fn get_stats(&self) -> Result<Stats, StatsServiceError>;
}
