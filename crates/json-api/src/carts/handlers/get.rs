//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    carts::errors::into_api_error,
    extensions::*,
    orders::get::OrderResponse,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartEnvelope {
    pub cart: OrderResponse,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Get Cart Handler
///
/// Returns the caller's cart with its items.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(&user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartEnvelope {
        cart: cart.into(),
        kind: ResponseKind::Success,
    }))
}
