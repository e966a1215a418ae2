//! Errors

use tracing::error;

use ordering_app::domain::categories::CategoriesServiceError;

use crate::responses::ApiError;

pub(crate) const NOT_FOUND: &str = "Category not found.";

pub(crate) fn into_api_error(error: CategoriesServiceError) -> ApiError {
    match error {
        CategoriesServiceError::NotFound => ApiError::not_found(NOT_FOUND),
        CategoriesServiceError::InUse => ApiError::conflict("Category is in use."),
        CategoriesServiceError::AlreadyExists
        | CategoriesServiceError::MissingRequiredData
        | CategoriesServiceError::InvalidData => {
            error!("category rejected by storage: {error}");

            ApiError::internal()
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage error: {source}");

            ApiError::internal()
        }
    }
}
