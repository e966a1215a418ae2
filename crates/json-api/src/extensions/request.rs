//! Request body helpers.
//!
//! Bodies are read after the caller has been authorised so that a malformed
//! payload never masks a 401.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::responses::{ApiError, INVALID_BODY};

pub(crate) trait RequestExt {
    /// Decode the JSON body, or `T::default()` when there is none.
    async fn body_or_default<T>(&mut self) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default;
}

impl RequestExt for Request {
    async fn body_or_default<T>(&mut self) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let payload = self.payload().await.map_err(|error| {
            debug!("could not read request body: {error}");

            ApiError::bad_request(INVALID_BODY)
        })?;

        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(payload).map_err(|error| {
            debug!("could not decode request body: {error}");

            ApiError::bad_request(INVALID_BODY)
        })
    }
}
