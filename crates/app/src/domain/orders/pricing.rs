//! Order totals.

use crate::domain::orders::records::OrderItemRecord;

/// Unit price multiplied by quantity, in cents.
#[must_use]
pub fn line_total(item: &OrderItemRecord) -> u64 {
    item.price.saturating_mul(u64::from(item.quantity))
}

/// Sum of every line total. Zero for an empty order.
#[must_use]
pub fn order_total(items: &[OrderItemRecord]) -> u64 {
    items
        .iter()
        .map(line_total)
        .fold(0, u64::saturating_add)
}
