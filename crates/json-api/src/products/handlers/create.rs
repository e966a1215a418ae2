//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use ordering_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    auth::require_admin,
    extensions::*,
    products::{errors::into_api_error, requests::ProductRequest},
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Create Product Handler
///
/// Creates a product together with its options.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    let details = req.body_or_default::<ProductRequest>().await?.validate()?;

    state
        .app
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details,
        })
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Product created."))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use ordering_app::domain::products::ProductsServiceError;

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_USER, make_product};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("product").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .products
            .expect_create_product()
            .once()
            .withf(|new| {
                new.details.name == "Latte"
                    && new.details.price == 550
                    && new.details.options.len() == 2
                    && new.details.options.iter().map(|o| o.price).sum::<u64>() == 130
            })
            .return_once(|_| Ok(make_product("Latte", 550)));

        let mut res = TestClient::post("http://example.com/product")
            .json(&json!({
                "user": TEST_ADMIN,
                "name": "Latte",
                "price": "5.50",
                "options": [
                    { "name": "Large", "price": "0.80" },
                    { "name": "Oat milk", "price": 0.5 },
                ],
            }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "message": "Product created.", "type": "success" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_price_returns_400() -> TestResult {
        let mocks = Mocks::new();

        let mut res = TestClient::post("http://example.com/product")
            .json(&json!({ "user": TEST_ADMIN, "name": "Latte", "price": "abc" }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body["errors"],
            json!([{
                "value": "abc",
                "msg": "Price is invalid",
                "param": "price",
                "location": "body",
            }])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_category_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidReference));

        let mut res = TestClient::post("http://example.com/product")
            .json(&json!({
                "user": TEST_ADMIN,
                "category": uuid::Uuid::now_v7().to_string(),
                "name": "Latte",
                "price": 5,
            }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["message"], "Category not found.");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_as_user_returns_401_regardless_of_payload() -> TestResult {
        let mocks = Mocks::new();

        let res = TestClient::post("http://example.com/product")
            .json(&json!({ "user": TEST_USER, "price": "abc" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
