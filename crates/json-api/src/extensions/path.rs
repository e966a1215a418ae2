//! Path parameter parsing helpers.

use std::str::FromStr;

use salvo::oapi::extract::PathParam;

use crate::responses::{ApiError, INVALID_ID};

pub(crate) trait PathParamExt {
    /// Parse the raw segment, rejecting malformed values with a 400.
    fn parse_or_400<T: FromStr>(self) -> Result<T, ApiError>;
}

impl PathParamExt for PathParam<String> {
    fn parse_or_400<T: FromStr>(self) -> Result<T, ApiError> {
        self.into_inner()
            .parse()
            .map_err(|_ignored| ApiError::bad_request(INVALID_ID))
    }
}
