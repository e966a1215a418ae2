//! Cart Item Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod update;

use serde::Deserialize;

use ordering_app::validation::{FieldErrors, validate_quantity};

use crate::requests::loose_string;

/// Quantity body shared by add and update.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuantityRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pub quantity: Option<String>,
}

impl QuantityRequest {
    fn validate(self, default: Option<u32>) -> Result<u32, FieldErrors> {
        let mut errors = FieldErrors::new();

        let quantity = validate_quantity(&mut errors, self.quantity.as_deref(), default);

        match quantity {
            Some(quantity) if errors.is_empty() => Ok(quantity),
            _ => Err(errors),
        }
    }
}
