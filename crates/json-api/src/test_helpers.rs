//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        checkout::MockCheckoutService,
        discounts::{
            MockDiscountsService,
            models::{DEFAULT_PERCENTAGE, Discount, DiscountUuid},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        stats::MockStatsService,
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();

    carts
}

fn strict_discounts_mock() -> MockDiscountsService {
    let mut discounts = MockDiscountsService::new();

    discounts.expect_generate_discount().never();
    discounts.expect_generate_discounts().never();

    discounts
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

fn strict_stats_mock() -> MockStatsService {
    let mut stats = MockStatsService::new();

    stats.expect_get_stats().never();

    stats
}

/// Every service refuses calls unless the test swaps in its own mock.
fn strict_app() -> AppContext {
    AppContext {
        products: Arc::new(strict_products_mock()),
        carts: Arc::new(strict_carts_mock()),
        discounts: Arc::new(strict_discounts_mock()),
        checkout: Arc::new(strict_checkout_mock()),
        stats: Arc::new(strict_stats_mock()),
    }
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(products),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with(
        AppContext {
            carts: Arc::new(carts),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn discounts_service(discounts: MockDiscountsService, route: Router) -> Service {
    service_with(
        AppContext {
            discounts: Arc::new(discounts),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    service_with(
        AppContext {
            checkout: Arc::new(checkout),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn stats_service(stats: MockStatsService, route: Router) -> Service {
    service_with(
        AppContext {
            stats: Arc::new(stats),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn make_product(name: &str, price: Decimal) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        price,
        description: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_item(product: Product, quantity: u32) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        product,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(user_id: &str, items: Vec<CartItem>) -> Cart {
    Cart {
        uuid: CartUuid::new(),
        user_id: user_id.to_string(),
        discount_hint: None,
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_discount(code: &str) -> Discount {
    Discount {
        uuid: DiscountUuid::new(),
        code: code.to_string(),
        percentage: DEFAULT_PERCENTAGE,
        is_used: false,
        milestone_sequence: None,
        created_at: Timestamp::UNIX_EPOCH,
        used_at: None,
    }
}
