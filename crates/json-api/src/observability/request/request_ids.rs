//! Request ids: taken from `x-request-id` when the caller sends one, otherwise
//! generated, and always echoed on the response.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

pub(super) fn resolve_request_id(supplied: Option<String>) -> String {
    match supplied {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::now_v7().to_string(),
    }
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => warn!(request_id, "request id is not a valid header value: {source}"),
    }
}

/// Handlers that render without setting a status answered 200.
pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_replaced() {
        let generated = resolve_request_id(Some("  ".to_string()));

        assert!(Uuid::parse_str(&generated).is_ok());
        assert_eq!(resolve_request_id(Some("abc".to_string())), "abc");
    }
}
