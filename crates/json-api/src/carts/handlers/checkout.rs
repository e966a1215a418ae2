//! Checkout Cart Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use ordering_app::{
    domain::carts::data::Checkout,
    validation::{FieldErrors, optional_text, required_text},
};

use crate::{
    carts::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CheckoutRequest {
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CheckoutRequest {
    fn validate(self) -> Result<Checkout, FieldErrors> {
        let mut errors = FieldErrors::new();

        let order_type = required_text(
            &mut errors,
            "type",
            self.order_type.as_deref(),
            "Type is required",
        );

        match order_type {
            Some(order_type) if errors.is_empty() => Ok(Checkout {
                order_type,
                notes: optional_text(self.notes.as_deref()),
            }),
            _ => Err(errors),
        }
    }
}

/// Checkout Cart Handler
///
/// Places the caller's cart as an open order.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    state
        .app
        .carts
        .get_cart(&user)
        .await
        .map_err(into_api_error)?;

    let checkout = req.body_or_default::<CheckoutRequest>().await?.validate()?;

    state
        .app
        .carts
        .checkout(&user, checkout)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Cart checked out."))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use ordering_app::domain::{carts::CartsServiceError, orders::status::OrderStatus};

    use crate::test_helpers::{Mocks, TEST_USER, make_order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("cart").patch(handler))
    }

    #[tokio::test]
    async fn test_checkout_success() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Ok(make_order(TEST_USER, OrderStatus::Cart)));

        mocks
            .carts
            .expect_checkout()
            .once()
            .withf(|user, checkout| {
                user.as_str() == TEST_USER
                    && *checkout
                        == Checkout {
                            order_type: "pickup".to_string(),
                            notes: None,
                        }
            })
            .return_once(|_, _| Ok(make_order(TEST_USER, OrderStatus::Open)));

        let mut res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "user": TEST_USER, "type": "pickup", "notes": "" }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["message"], "Cart checked out.");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_type_returns_400() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Ok(make_order(TEST_USER, OrderStatus::Cart)));

        let mut res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "user": TEST_USER }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["errors"][0]["param"], "type");
        assert_eq!(body["errors"][0]["msg"], "Type is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_cart_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "user": TEST_USER, "type": "pickup" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
