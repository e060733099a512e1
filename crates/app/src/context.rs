//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, PgCheckoutService},
        discounts::{DiscountsService, PgDiscountsService},
        products::{PgProductsService, ProductsService},
        stats::{PgStatsService, StatsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub discounts: Arc<dyn DiscountsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub stats: Arc<dyn StatsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Wire every Postgres-backed service onto a shared pool.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            discounts: Arc::new(PgDiscountsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db.clone())),
            stats: Arc::new(PgStatsService::new(db)),
        }
    }
}
