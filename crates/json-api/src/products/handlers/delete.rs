//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::products::records::ProductUuid;

use crate::{
    auth::require_admin,
    extensions::*,
    products::errors::into_api_error,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    let product: ProductUuid = id.parse_or_400()?;

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Product deleted."))
}
