//! App Router

use salvo::Router;

use crate::{carts, checkout, discounts, healthcheck, observability, products, stats};

/// Every API route, without state injection or middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::add::handler),
        )
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(
            Router::with_path("admin")
                .push(Router::with_path("discounts/generate").post(discounts::generate::handler))
                .push(Router::with_path("stats").get(stats::get::handler)),
        )
}
