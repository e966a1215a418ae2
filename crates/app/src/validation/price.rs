//! Prices, held as integral minor units (cents).

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::validation::FieldErrors;

const MINOR_UNIT_SCALE: u32 = 2;

/// Parse a user supplied price into cents.
///
/// Characters other than digits and `.` are discarded first, so `"$12.50"` is
/// accepted. Sub-cent precision rounds half away from zero.
#[must_use]
pub fn parse_price(value: &str) -> Option<u64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    if !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let amount = Decimal::from_str(&cleaned).ok()?;

    let cents = amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        * Decimal::ONE_HUNDRED;

    cents.to_i64().and_then(|cents| u64::try_from(cents).ok())
}

/// Render cents as a decimal string with two places, e.g. `"12.50"`.
#[must_use]
pub fn format_price(cents: u64) -> String {
    Decimal::from_i128_with_scale(i128::from(cents), MINOR_UNIT_SCALE).to_string()
}

/// Validate a price field, returning cents.
pub fn validate_price(errors: &mut FieldErrors, param: &str, value: Option<&str>) -> Option<u64> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        errors.push(param, value, "Price is required");
        return None;
    };

    let price = parse_price(raw);

    if price.is_none() {
        errors.push(param, value, "Price is invalid");
    }

    price
}
