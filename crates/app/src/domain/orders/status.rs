//! Order Status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Lifecycle state of an order. A `Cart` is an order still being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Cart,
    Open,
    Closed,
    Delivered,
    Paid,
    Ready,
    Received,
}

impl OrderStatus {
    pub const ALL: [Self; 7] = [
        Self::Cart,
        Self::Open,
        Self::Closed,
        Self::Delivered,
        Self::Paid,
        Self::Ready,
        Self::Received,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Delivered => "delivered",
            Self::Paid => "paid",
            Self::Ready => "ready",
            Self::Received => "received",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownOrderStatus(value.to_string()))
    }
}
