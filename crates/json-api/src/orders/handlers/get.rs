//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::{
    domain::orders::records::{OrderItemRecord, OrderRecord, OrderUuid},
    validation::format_price,
};

use crate::{
    auth::require_owner_or_admin,
    extensions::*,
    orders::errors::into_api_error,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The identity provider user who placed the order
    pub user: String,

    /// The order status
    pub status: String,

    /// How the order is fulfilled
    #[serde(rename = "type")]
    pub order_type: String,

    /// Customer notes
    pub notes: String,

    /// Sum of the line totals with two decimal places
    pub price: String,

    /// The ordered items
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            user: order.user_id.into_inner(),
            status: order.status.to_string(),
            order_type: order.order_type,
            notes: order.notes,
            price: format_price(order.price),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the item
    pub uuid: Uuid,

    /// The order the item belongs to
    pub order_uuid: Uuid,

    /// The ordered product
    pub product_uuid: Uuid,

    /// Number of units
    pub quantity: u32,

    /// Unit price captured when the item was added
    pub price: String,

    /// The date and time the item was added
    pub created_at: String,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            order_uuid: item.order_uuid.into_uuid(),
            product_uuid: item.product_uuid.into_uuid(),
            quantity: item.quantity,
            price: format_price(item.price),
            created_at: item.created_at.to_string(),
        }
    }
}

/// Single Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderEnvelope {
    pub order: OrderResponse,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Get Order Handler
///
/// Returns an order to its owner or an admin.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let order: OrderUuid = id.parse_or_400()?;

    let order = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_api_error)?;

    require_owner_or_admin(state, &user, &order.user_id).await?;

    Ok(Json(OrderEnvelope {
        order: order.into(),
        kind: ResponseKind::Success,
    }))
}
