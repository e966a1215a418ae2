//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::products::{data::ProductUpdate, records::ProductUuid};

use crate::{
    auth::require_admin,
    extensions::*,
    products::{errors::into_api_error, requests::ProductRequest},
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Update Product Handler
///
/// Replaces every field of the product and its whole option list.
#[endpoint(
    tags("products"),
    summary = "Update Product",
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

    let product: ProductUuid = id.parse_or_400()?;

    state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    let details = req.body_or_default::<ProductRequest>().await?.validate()?;

    state
        .app
        .products
        .update_product(product, ProductUpdate { details })
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Product updated."))
}
