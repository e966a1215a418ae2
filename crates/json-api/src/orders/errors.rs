//! Errors

use tracing::error;

use ordering_app::domain::orders::OrdersServiceError;

use crate::responses::ApiError;

pub(crate) const NOT_FOUND: &str = "Order not found.";

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found(NOT_FOUND),
        OrdersServiceError::AlreadyExists => {
            ApiError::conflict("The customer already has an open cart.")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            error!("order rejected by storage: {error}");

            ApiError::internal()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            ApiError::internal()
        }
    }
}
