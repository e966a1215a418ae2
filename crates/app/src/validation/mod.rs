//! Request field validation and sanitisation.
//!
//! Validators append [`FieldError`]s to a shared [`FieldErrors`] collection so
//! that every problem with a payload is reported at once.

mod abn;
mod address;
mod order;
mod price;
mod text;

pub use abn::{format_abn, is_valid_abn, validate_abn};
pub use address::validate_address;
pub use order::{validate_quantity, validate_status};
pub use price::{format_price, parse_price, validate_price};
pub use text::{escape, optional_text, required_text};

/// Where a rejected value came from.
pub const BODY_LOCATION: &str = "body";

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub value: Option<String>,
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

/// Ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a body field.
    pub fn push(&mut self, param: &str, value: Option<&str>, msg: &str) {
        self.0.push(FieldError {
            value: value.map(str::to_string),
            msg: msg.to_string(),
            param: param.to_string(),
            location: BODY_LOCATION,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Finish validation, yielding `value` only when nothing was rejected.
    ///
    /// # Errors
    ///
    /// Returns the collected errors when at least one field was rejected.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
