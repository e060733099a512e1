use clap::Args;
use storefront_app::domain::discounts::{DiscountsService, PgDiscountsService};

#[derive(Debug, Args)]
pub(crate) struct GenerateDiscountArgs {
    /// Number of codes to issue
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
    count: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: GenerateDiscountArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;

    let discounts = PgDiscountsService::new(db)
        .generate_discounts(usize::from(args.count))
        .await
        .map_err(|error| format!("failed to generate discounts: {error}"))?;

    for discount in discounts {
        println!("{}\t{}%", discount.code, discount.percentage);
    }

    Ok(())
}
