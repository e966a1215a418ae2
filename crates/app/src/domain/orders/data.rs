//! Order Data

use crate::domain::orders::status::OrderStatus;

/// Order Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    pub status: OrderStatus,

    /// Replacement notes; existing notes are kept when `None`.
    pub notes: Option<String>,
}
