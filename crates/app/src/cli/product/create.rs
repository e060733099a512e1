use clap::Args;
use rust_decimal::Decimal;
use storefront_app::{
    domain::products::{
        PgProductsService, ProductsService,
        models::{NewProduct, ProductUuid},
    },
    money::format_price,
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price with at most two decimal places, e.g. 29.99
    #[arg(long)]
    price: Decimal,

    /// Optional free-text description
    #[arg(long, default_value = "")]
    description: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;

    let product = PgProductsService::new(db)
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: args.name,
            price: args.price,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("price: {}", format_price(product.price));

    Ok(())
}
