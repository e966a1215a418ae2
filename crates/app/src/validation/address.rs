//! Postal address group.

use crate::{
    domain::profiles::records::Address,
    validation::{FieldErrors, optional_text},
};

/// The four address fields are all-or-nothing.
///
/// Returns `None` when every field is blank. When only some are supplied, each
/// missing field is reported.
pub fn validate_address(
    errors: &mut FieldErrors,
    address: Option<&str>,
    suburb: Option<&str>,
    state: Option<&str>,
    postcode: Option<&str>,
) -> Option<Address> {
    let fields = [
        ("address", address, "Address is required in address."),
        ("suburb", suburb, "Suburb is required in address."),
        ("state", state, "State is required in address."),
        ("postCode", postcode, "Postcode is required in address."),
    ]
    .map(|(param, raw, message)| (param, raw, message, optional_text(raw)));

    if fields.iter().all(|(_, _, _, value)| value.is_none()) {
        return None;
    }

    for (param, raw, message, value) in &fields {
        if value.is_none() {
            errors.push(param, *raw, message);
        }
    }

    let [address, suburb, state, postcode] = fields.map(|(_, _, _, value)| value);

    Some(Address {
        address: address?,
        suburb: suburb?,
        state: state?,
        postcode: postcode?,
    })
}
