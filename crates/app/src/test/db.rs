//! Per-test PostgreSQL databases on a shared container.

use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, Postgres, Transaction, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

use crate::database;

const TEST_USER: &str = "storefront_test";
const TEST_PASSWORD: &str = "storefront_test_password";
const MAINTENANCE_DB: &str = "postgres";

/// Reject anything that could not be safely interpolated into `CREATE DATABASE`.
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err("database name must be 1-63 characters long".to_string());
    }

    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return Err("database name must start with a letter or underscore".to_string());
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("database name can only contain letters, digits and underscores".to_string());
    }

    Ok(())
}

fn unique_database_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let thread = format!("{:?}", std::thread::current().id());
    let thread: String = thread.chars().filter(char::is_ascii_digit).collect();

    format!("storefront_test_{nanos}_{thread}")
}

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases are dropped from a background task because `Drop` cannot await.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(TEST_USER)
        .with_password(TEST_PASSWORD)
        .with_db_name(TEST_USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("PostgreSQL container should start")
}

async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("failed to drop test database {name}: {error}");
            }
        }
    });

    sender
}

async fn database_url(container: &ContainerAsync<PostgresImage>, db_name: &str) -> String {
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("container should expose 5432");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{TEST_USER}:{TEST_PASSWORD}@{host}:{port}/{db_name}")
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    let Some(container) = POSTGRES_CONTAINER.get() else {
        return Ok(());
    };

    if validate_database_name(name).is_err() {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&database_url(container, MAINTENANCE_DB).await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database owned by one test.
///
/// Services commit normally against it; isolation comes from every test
/// getting its own database. It is dropped once the `TestDb` goes away.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(queue) = DROP_QUEUE.get() {
            let _ = queue.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        Self::with_name(&unique_database_name()).await
    }

    pub async fn with_name(name: &str) -> Self {
        if let Err(error) = validate_database_name(name) {
            panic!("invalid test database name {name:?}: {error}");
        }

        DROP_QUEUE.get_or_init(start_drop_queue).await;

        let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

        let mut admin = PgConnection::connect(&database_url(container, MAINTENANCE_DB).await)
            .await
            .expect("maintenance database should accept connections");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("test database should be created");

        admin.close().await.expect("admin connection should close");

        let pool = PgPool::connect(&database_url(container, name).await)
            .await
            .expect("test database should accept connections");

        database::migrate(&pool)
            .await
            .expect("migrations should apply to a fresh database");

        Self {
            pool,
            name: name.to_string(),
        }
    }

    /// A transaction that rolls back when dropped, for repository-level tests.
    pub async fn begin_test_transaction(&self) -> Transaction<'_, Postgres> {
        self.pool
            .begin()
            .await
            .expect("test transaction should begin")
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;

    use super::*;

    #[test]
    fn generated_names_are_valid() {
        assert!(validate_database_name(&unique_database_name()).is_ok());
    }

    #[test]
    fn rejects_unsafe_names() {
        for name in ["", "1db", "has-hyphen", "quote\"d", "semi;colon", "a".repeat(64).as_str()] {
            assert!(validate_database_name(name).is_err(), "{name:?} accepted");
        }
    }

    #[tokio::test]
    async fn fresh_database_has_order_counter_at_zero() {
        let test_db = TestDb::new().await;

        let value: i64 = query_scalar("SELECT value FROM order_sequence")
            .fetch_one(test_db.pool())
            .await
            .expect("order_sequence should be seeded");

        assert_eq!(value, 0);
    }

    #[tokio::test]
    async fn test_transactions_roll_back_on_drop() {
        let test_db = TestDb::new().await;

        {
            let mut tx = test_db.begin_test_transaction().await;

            query("UPDATE order_sequence SET value = 42")
                .execute(&mut *tx)
                .await
                .expect("update should run");
        }

        let value: i64 = query_scalar("SELECT value FROM order_sequence")
            .fetch_one(test_db.pool())
            .await
            .expect("order_sequence should be readable");

        assert_eq!(value, 0);
    }
}
