//! Order Records

use jiff::Timestamp;

use crate::{
    auth::UserId,
    domain::{orders::status::OrderStatus, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub order_type: String,
    pub notes: String,

    /// Sum of the line totals, in cents.
    pub price: u64,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item Record
///
/// `price` is the unit price captured when the item was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub price: u64,
    pub created_at: Timestamp,
}
