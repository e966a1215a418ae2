//! Order and cart fields.

use crate::{domain::orders::status::OrderStatus, validation::FieldErrors};

const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Validate the `status` field against the known order statuses.
pub fn validate_status(errors: &mut FieldErrors, value: Option<&str>) -> Option<OrderStatus> {
    let status = value.map(str::trim).and_then(|status| status.parse().ok());

    if status.is_none() {
        errors.push("status", value, "Invalid status");
    }

    status
}

/// Validate the `quantity` field, using `default` when it is absent.
pub fn validate_quantity(
    errors: &mut FieldErrors,
    value: Option<&str>,
    default: Option<u32>,
) -> Option<u32> {
    let quantity = match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|quantity| (1..=MAX_QUANTITY).contains(quantity)),
        None => default,
    };

    if quantity.is_none() {
        errors.push("quantity", value, "Quantity must be a positive integer");
    }

    quantity
}
