//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::{
    carts::data::NewCartItem,
    orders::records::{OrderItemUuid, OrderUuid},
    products::records::ProductUuid,
};

use crate::{
    carts::{errors::into_api_error, items::QuantityRequest},
    extensions::*,
    products,
    responses::{ApiError, MessageResponse},
    state::State,
};

const DEFAULT_QUANTITY: u32 = 1;

/// Add Cart Item Handler
///
/// Adds a product to the caller's cart, opening a cart when there is none.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let product: ProductUuid = id.parse_or_400()?;

    state
        .app
        .products
        .get_product(product)
        .await
        .map_err(products::errors::into_api_error)?;

    let quantity = req
        .body_or_default::<QuantityRequest>()
        .await?
        .validate(Some(DEFAULT_QUANTITY))?;

    state
        .app
        .carts
        .add_item(
            &user,
            NewCartItem {
                uuid: OrderItemUuid::new(),
                product_uuid: product,
                quantity,
                cart_uuid: OrderUuid::new(),
            },
        )
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Item added to cart."))
}
