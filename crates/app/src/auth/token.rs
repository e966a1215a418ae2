//! Bearer token verification.

use std::{
    collections::HashMap,
    fmt::{Debug, Formatter, Result as FmtResult},
};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, jwk::JwkSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::auth::UserId;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token header has no key id")]
    MissingKeyId,

    #[error("token was signed with an unknown key")]
    UnknownKey,

    #[error("token has no subject")]
    MissingSubject,

    #[error("key set contains no usable signing keys")]
    NoKeys,

    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// Verifies access tokens against a fixed set of signing keys.
pub struct JwtVerifier {
    keys: HashMap<String, DecodingKey>,
    validation: Validation,
}

impl JwtVerifier {
    /// Build an RS256 verifier from the identity provider's key set.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::NoKeys`] when no key in the set can be used.
    pub fn from_jwks(jwks: &JwkSet, issuer: &str, audience: &str) -> Result<Self, TokenError> {
        let mut keys = HashMap::new();

        for jwk in &jwks.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };

            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(error) => warn!(kid = %kid, %error, "skipping unusable signing key"),
            }
        }

        if keys.is_empty() {
            return Err(TokenError::NoKeys);
        }

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);

        Ok(Self::from_parts(keys, validation))
    }

    pub(crate) fn from_parts(keys: HashMap<String, DecodingKey>, validation: Validation) -> Self {
        Self { keys, validation }
    }

    /// Verify a token and return the subject it was issued to.
    ///
    /// # Errors
    ///
    /// Returns an error when the signature, issuer, audience or expiry is invalid.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or(TokenError::MissingKeyId)?;
        let key = self.keys.get(&kid).ok_or(TokenError::UnknownKey)?;

        let claims = decode::<Claims>(token, key, &self.validation)?.claims;

        if claims.sub.trim().is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(UserId::new(claims.sub))
    }
}

impl Debug for JwtVerifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("JwtVerifier")
            .field("keys", &self.keys.keys().collect::<Vec<_>>())
            .field("validation", &self.validation)
            .finish()
    }
}
