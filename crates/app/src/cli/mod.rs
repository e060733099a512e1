use clap::{Parser, Subcommand};
use storefront_app::database::{self, DEFAULT_MAX_CONNECTIONS, Db};

mod db;
mod discount;
mod product;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
    Discount(discount::DiscountCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
            Commands::Discount(command) => discount::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

/// Connect and bring the schema up to date before running a command.
async fn connect(database_url: &str) -> Result<Db, String> {
    let pool = database::connect(database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    Ok(Db::new(pool))
}
