//! Errors

use tracing::error;

use ordering_app::domain::carts::CartsServiceError;

use crate::responses::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::AlreadyExists => ApiError::unauthorized_with("Cart already exists."),
        CartsServiceError::NotFound => ApiError::not_found("Cart not found."),
        CartsServiceError::ItemNotFound => ApiError::not_found("Cart item not found."),
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found."),
        CartsServiceError::NotOwner => ApiError::unauthorized(),
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            error!("cart rejected by storage: {error}");

            ApiError::internal()
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            ApiError::internal()
        }
    }
}
