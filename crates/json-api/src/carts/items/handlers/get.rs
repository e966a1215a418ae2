//! Get Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use ordering_app::domain::orders::records::OrderItemUuid;

use crate::{
    carts::errors::into_api_error,
    extensions::*,
    orders::get::OrderItemResponse,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemEnvelope {
    pub item: OrderItemResponse,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Get Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Get Cart Item",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartItemEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let item: OrderItemUuid = id.parse_or_400()?;

    let item = state
        .app
        .carts
        .get_item(&user, item)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartItemEnvelope {
        item: item.into(),
        kind: ResponseKind::Success,
    }))
}
