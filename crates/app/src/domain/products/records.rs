//! Product Records

use jiff::Timestamp;

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Option UUID
pub type ProductOptionUuid = TypedUuid<ProductOptionRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub category_uuid: Option<CategoryUuid>,
    pub name: String,
    pub price: u64,
    pub description: Option<String>,
    pub options: Vec<ProductOptionRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product Option Record
///
/// A named add-on with its own price, listed in the order it was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOptionRecord {
    pub uuid: ProductOptionUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
}
