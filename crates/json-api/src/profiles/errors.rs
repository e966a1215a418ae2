//! Errors

use tracing::error;

use ordering_app::domain::profiles::ProfilesServiceError;

use crate::responses::ApiError;

pub(crate) const NOT_FOUND: &str = "Profile not found.";
pub(crate) const ALREADY_EXISTS: &str = "Profile already exists.";

pub(crate) fn into_api_error(error: ProfilesServiceError) -> ApiError {
    match error {
        ProfilesServiceError::NotFound => ApiError::not_found(NOT_FOUND),
        ProfilesServiceError::AlreadyExists => ApiError::unauthorized_with(ALREADY_EXISTS),
        ProfilesServiceError::MissingRequiredData | ProfilesServiceError::InvalidData => {
            error!("profile rejected by storage: {error}");

            ApiError::internal()
        }
        ProfilesServiceError::Sql(source) => {
            error!("profile storage error: {source}");

            ApiError::internal()
        }
    }
}
