//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::orders::records::OrderItemUuid;

use crate::{
    carts::{errors::into_api_error, items::QuantityRequest},
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Update Cart Item Handler
///
/// Sets the quantity of an item in the caller's cart.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let item: OrderItemUuid = id.parse_or_400()?;

    state
        .app
        .carts
        .get_item(&user, item)
        .await
        .map_err(into_api_error)?;

    let quantity = req
        .body_or_default::<QuantityRequest>()
        .await?
        .validate(None)?;

    state
        .app
        .carts
        .update_item(&user, item, quantity)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Cart item updated."))
}
