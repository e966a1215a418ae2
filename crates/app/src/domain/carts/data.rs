//! Cart Data

use crate::domain::{
    orders::records::{OrderItemUuid, OrderUuid},
    products::records::ProductUuid,
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub uuid: OrderUuid,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,

    /// Used when the user has no cart yet.
    pub cart_uuid: OrderUuid,
}

/// Checkout Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub order_type: String,
    pub notes: Option<String>,
}
