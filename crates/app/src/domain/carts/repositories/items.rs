//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    carts::models::{CartItem, CartItemUuid, CartUuid},
    products::models::{Product, ProductUuid},
};

const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");
const INCREMENT_CART_ITEM_SQL: &str = include_str!("../sql/increment_cart_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(LIST_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Add one unit of `product` to the cart, inserting the item under `item`
    /// when the cart doesn't hold the product yet. Returns the new quantity.
    pub(crate) async fn increment_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
        item: CartItemUuid,
    ) -> Result<u32, sqlx::Error> {
        let quantity = query_scalar::<Postgres, i32>(INCREMENT_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        quantity_from_i32(quantity)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let product = Product {
            uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("product_name")?,
            price: row.try_get("product_price")?,
            description: row.try_get("product_description")?,
            created_at: row
                .try_get::<SqlxTimestamp, _>("product_created_at")?
                .to_jiff(),
        };

        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            product,
            quantity: quantity_from_i32(row.try_get("quantity")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

fn quantity_from_i32(quantity: i32) -> Result<u32, sqlx::Error> {
    u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}
