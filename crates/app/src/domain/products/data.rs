//! Products Data

use crate::domain::{
    categories::records::CategoryUuid,
    products::records::{ProductOptionUuid, ProductUuid},
};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Product Update Data
///
/// Replaces every field, including the full option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub details: ProductDetails,
}

/// Product Details Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub category_uuid: Option<CategoryUuid>,
    pub name: String,
    pub price: u64,
    pub description: Option<String>,
    pub options: Vec<NewProductOption>,
}

/// New Product Option Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductOption {
    pub uuid: ProductOptionUuid,
    pub name: String,
    pub price: u64,
}
