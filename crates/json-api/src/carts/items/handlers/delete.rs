//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::orders::records::OrderItemUuid;

use crate::{
    carts::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let item: OrderItemUuid = id.parse_or_400()?;

    state
        .app
        .carts
        .remove_item(&user, item)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Cart item removed."))
}
