//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{errors::into_api_error, get::OrderResponse},
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<OrderResponse>,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// List Orders Handler
///
/// Admins see every placed order, other callers see their own.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let orders = if state.app.auth.is_admin(&user).await {
        state.app.orders.list_orders().await
    } else {
        state.app.orders.list_user_orders(&user).await
    }
    .map_err(into_api_error)?;

    if orders.is_empty() {
        return Err(ApiError::not_found("Orders not found."));
    }

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(OrderResponse::from).collect(),
        kind: ResponseKind::Success,
    }))
}
