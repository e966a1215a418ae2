//! Response envelope.
//!
//! Every body carries a `type` discriminator. Failures render as an
//! [`ErrorResponse`] with either a `message` or the rejected `errors`.

use salvo::{
    http::StatusCode,
    oapi::{
        self, Components, Content, EndpointOutRegister, Operation, ToResponses, ToSchema,
    },
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

use ordering_app::validation::{FieldError, FieldErrors};

pub(crate) const UNAUTHORIZED: &str = "Unauthorized action.";
pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal server error.";
pub(crate) const INVALID_ID: &str = "Invalid id.";
pub(crate) const INVALID_BODY: &str = "Invalid request body.";

/// Response discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ResponseKind {
    Success,
    Error,
}

/// Confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

impl MessageResponse {
    pub(crate) fn success(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            kind: ResponseKind::Success,
        })
    }
}

/// Rejected request field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldErrorResponse {
    pub value: Option<String>,
    pub msg: String,
    pub param: String,
    pub location: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        Self {
            value: error.value,
            msg: error.msg,
            param: error.param,
            location: error.location.to_string(),
        }
    }
}

/// Error envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorResponse>>,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// A failed request: status code plus envelope.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) body: ErrorResponse,
}

impl ApiError {
    pub(crate) fn message(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: ErrorResponse {
                message: Some(message.to_string()),
                errors: None,
                kind: ResponseKind::Error,
            },
        }
    }

    pub(crate) fn unauthorized() -> Self {
        Self::message(StatusCode::UNAUTHORIZED, UNAUTHORIZED)
    }

    pub(crate) fn unauthorized_with(message: &str) -> Self {
        Self::message(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self::message(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn bad_request(message: &str) -> Self {
        Self::message(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn conflict(message: &str) -> Self {
        Self::message(StatusCode::CONFLICT, message)
    }

    pub(crate) fn internal() -> Self {
        Self::message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                message: None,
                errors: Some(errors.into_iter().map(FieldErrorResponse::from).collect()),
                kind: ResponseKind::Error,
            },
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}

impl ToResponses for ApiError {
    fn to_responses(components: &mut Components) -> oapi::Responses {
        let schema = ErrorResponse::to_schema(components);

        [
            (StatusCode::BAD_REQUEST, "Validation failed"),
            (StatusCode::UNAUTHORIZED, "Unauthorized action"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ]
        .into_iter()
        .fold(oapi::Responses::new(), |responses, (status, description)| {
            responses.response(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", Content::new(schema.clone())),
            )
        })
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation
            .responses
            .append(&mut Self::to_responses(components));
    }
}
