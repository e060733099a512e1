//! Product Index Handler

use salvo::prelude::*;

use crate::{extensions::*, products::ProductResponse};

/// Product Index Handler
///
/// Returns every product in the catalog, ordered by name.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Catalog products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
