//! Errors

use tracing::error;

use ordering_app::domain::products::ProductsServiceError;

use crate::responses::ApiError;

pub(crate) const NOT_FOUND: &str = "Product not found.";

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found(NOT_FOUND),
        ProductsServiceError::InvalidReference => ApiError::not_found("Category not found."),
        ProductsServiceError::InUse => ApiError::conflict("Product is in use."),
        ProductsServiceError::AlreadyExists
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            error!("product rejected by storage: {error}");

            ApiError::internal()
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            ApiError::internal()
        }
    }
}
