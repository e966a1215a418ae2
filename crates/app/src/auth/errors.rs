//! Auth service errors.

use thiserror::Error;

use crate::auth::{Auth0Error, TokenError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid bearer token")]
    Token(#[from] TokenError),

    #[error("identity provider error")]
    Auth0(#[from] Auth0Error),

    #[error("an audience is required to verify bearer tokens")]
    MissingAudience,

    #[error("bearer token verification is not enabled")]
    VerificationDisabled,
}
