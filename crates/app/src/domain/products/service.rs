//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    money::CURRENCY_SCALE,
    domain::products::{
        errors::ProductsServiceError,
        models::{MAX_NAME_LENGTH, NewProduct, Product, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        validate_new_product(&product)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Names fit the catalog column and prices are whole cents, never negative.
fn validate_new_product(product: &NewProduct) -> Result<(), ProductsServiceError> {
    let name_length = product.name.trim().chars().count();

    if name_length == 0 || product.name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductsServiceError::InvalidData);
    }

    if product.price.is_sign_negative() || product.price.normalize().scale() > CURRENCY_SCALE {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by name.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new catalog product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}
