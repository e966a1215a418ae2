//! Update Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::Deserialize;

use ordering_app::{
    domain::orders::{
        data::OrderUpdate,
        records::{OrderRecord, OrderUuid},
        status::OrderStatus,
    },
    validation::{FieldErrors, optional_text, validate_status},
};

use crate::{
    auth::require_admin,
    extensions::*,
    orders::errors::into_api_error,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Update Order Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateOrderRequest {
    fn validate(self) -> Result<OrderUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();

        let status = validate_status(&mut errors, self.status.as_deref());

        match status {
            Some(status) if errors.is_empty() => Ok(OrderUpdate {
                status,
                notes: optional_text(self.notes.as_deref()),
            }),
            _ => Err(errors),
        }
    }
}

/// A cart only leaves the `cart` status once it carries an order type.
fn check_type(order: &OrderRecord, update: &OrderUpdate) -> Result<(), FieldErrors> {
    let leaves_cart = order.status == OrderStatus::Cart && update.status != OrderStatus::Cart;

    if leaves_cart && order.order_type.trim().is_empty() {
        let mut errors = FieldErrors::new();
        errors.push("type", None, "Type is required");

        return Err(errors);
    }

    Ok(())
}

/// Update Order Handler
///
/// Moves an order to a new status.
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    let order: OrderUuid = id.parse_or_400()?;

    let existing = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_api_error)?;

    let update = req
        .body_or_default::<UpdateOrderRequest>()
        .await?
        .validate()?;

    check_type(&existing, &update)?;

    state
        .app
        .orders
        .update_order(order, update)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Order updated."))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use ordering_app::domain::orders::{OrdersServiceError, status::OrderStatus};

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_USER, make_order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("order/{id}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_order_success() -> TestResult {
        let mut mocks = Mocks::new();
        let order = make_order(TEST_USER, OrderStatus::Open);
        let uuid = order.uuid;
        let updated = make_order(TEST_USER, OrderStatus::Ready);

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(move |_| Ok(order));

        mocks
            .orders
            .expect_update_order()
            .once()
            .withf(move |requested, update| {
                *requested == uuid
                    && *update
                        == OrderUpdate {
                            status: OrderStatus::Ready,
                            notes: Some("Table 4".to_string()),
                        }
            })
            .return_once(move |_, _| Ok(updated));

        let mut res = TestClient::patch(format!("http://example.com/order/{uuid}"))
            .json(&json!({ "user": TEST_ADMIN, "status": "ready", "notes": " Table 4 " }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "message": "Order updated.", "type": "success" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_status_returns_400() -> TestResult {
        let mut mocks = Mocks::new();
        let order = make_order(TEST_USER, OrderStatus::Open);
        let uuid = order.uuid;

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(move |_| Ok(order));

        let mut res = TestClient::patch(format!("http://example.com/order/{uuid}"))
            .json(&json!({ "user": TEST_ADMIN, "status": "lost" }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body["errors"],
            json!([{
                "value": "lost",
                "msg": "Invalid status",
                "param": "status",
                "location": "body",
            }])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_without_type_cannot_be_opened() -> TestResult {
        let mut mocks = Mocks::new();
        let order = make_order(TEST_USER, OrderStatus::Cart);
        let uuid = order.uuid;

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(move |_| Ok(order));

        mocks.orders.expect_update_order().never();

        let mut res = TestClient::patch(format!("http://example.com/order/{uuid}"))
            .json(&json!({ "user": TEST_ADMIN, "status": "open" }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body["errors"],
            json!([{
                "value": null,
                "msg": "Type is required",
                "param": "type",
                "location": "body",
            }])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_with_type_can_be_opened() -> TestResult {
        let mut mocks = Mocks::new();
        let mut order = make_order(TEST_USER, OrderStatus::Cart);
        order.order_type = "pickup".to_string();
        let uuid = order.uuid;
        let updated = make_order(TEST_USER, OrderStatus::Open);

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(move |_| Ok(order));

        mocks
            .orders
            .expect_update_order()
            .once()
            .return_once(move |_, _| Ok(updated));

        let res = TestClient::patch(format!("http://example.com/order/{uuid}"))
            .json(&json!({ "user": TEST_ADMIN, "status": "open" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::patch(format!("http://example.com/order/{}", OrderUuid::new()))
            .json(&json!({ "user": TEST_ADMIN, "status": "paid" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_owner_without_admin_role_returns_401() -> TestResult {
        let res = TestClient::patch(format!("http://example.com/order/{}", OrderUuid::new()))
            .json(&json!({ "user": TEST_USER, "status": "paid" }))
            .send(&make_service(Mocks::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
