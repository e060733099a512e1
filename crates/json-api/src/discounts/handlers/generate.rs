//! Generate Discount Handler

use salvo::prelude::*;

use crate::{
    discounts::{DiscountResponse, errors::into_status_error},
    extensions::*,
    observability::record_discounts_issued,
};

/// Generate Discount Handler
///
/// Issues one new 10% code.
#[endpoint(
    tags("admin"),
    summary = "Generate Discount Code",
    responses(
        (status_code = StatusCode::CREATED, description = "Discount issued"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "No free code could be found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.state()?;

    let discount = state
        .app
        .discounts
        .generate_discount()
        .await
        .map_err(into_status_error)?;

    record_discounts_issued(1);

    res.status_code(StatusCode::CREATED);

    Ok(Json(discount.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::discounts::{DiscountsServiceError, MockDiscountsService};

    use crate::test_helpers::{discounts_service, make_discount};

    use super::*;

    fn make_service(discounts: MockDiscountsService) -> Service {
        discounts_service(
            discounts,
            Router::with_path("admin/discounts/generate").post(handler),
        )
    }

    fn strict(discounts: &mut MockDiscountsService) {
        discounts.expect_generate_discounts().never();
    }

    #[tokio::test]
    async fn test_generate_returns_201_with_new_code() -> TestResult {
        let discount = make_discount("AB12CD34");

        let mut discounts = MockDiscountsService::new();

        discounts
            .expect_generate_discount()
            .once()
            .return_once(move || Ok(discount));

        strict(&mut discounts);

        let mut res = TestClient::post("http://example.com/admin/discounts/generate")
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: DiscountResponse = res.take_json().await?;

        assert_eq!(body.code, "AB12CD34");
        assert_eq!(body.percentage, "10.00");
        assert!(!body.is_used);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_exhausted_code_space_returns_503() -> TestResult {
        let mut discounts = MockDiscountsService::new();

        discounts
            .expect_generate_discount()
            .once()
            .return_once(|| Err(DiscountsServiceError::CodeSpaceExhausted { attempts: 16 }));

        strict(&mut discounts);

        let res = TestClient::post("http://example.com/admin/discounts/generate")
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        Ok(())
    }
}
