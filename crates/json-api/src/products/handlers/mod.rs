//! Product Handlers

pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{domain::products::models::Product, money::format_price};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unit price as a decimal string with two places
    pub price: String,

    /// Free-text description, possibly empty
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid.into_uuid(),
            name: product.name,
            price: format_price(product.price),
            description: product.description,
        }
    }
}
