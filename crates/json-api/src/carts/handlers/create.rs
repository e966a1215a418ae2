//! Create Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use ordering_app::domain::{carts::data::NewCart, orders::records::OrderUuid};

use crate::{
    carts::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Create Cart Handler
///
/// Opens an empty cart. A caller may hold one cart at a time.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    state
        .app
        .carts
        .create_cart(
            &user,
            NewCart {
                uuid: OrderUuid::new(),
            },
        )
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Cart created."))
}
