//! Auth0 client for the token, management and key set endpoints.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jsonwebtoken::jwk::JwkSet;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::auth::{Role, UserId};

/// Configuration for an Auth0 tenant.
#[derive(Clone)]
pub struct Auth0Config {
    /// Tenant domain, e.g. `"example.au.auth0.com"`. A full `http(s)://` origin is
    /// used verbatim.
    pub domain: String,

    /// Machine-to-machine client used for the management API.
    pub client_id: String,
    pub client_secret: Zeroizing<String>,

    /// API audience expected in user access tokens.
    pub audience: Option<String>,
}

impl Auth0Config {
    /// Origin every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');

        if domain.starts_with("https://") || domain.starts_with("http://") {
            domain.to_string()
        } else {
            format!("https://{domain}")
        }
    }

    /// Issuer claim carried by tokens minted for this tenant.
    #[must_use]
    pub fn issuer(&self) -> String {
        format!("{}/", self.base_url())
    }

    fn management_audience(&self) -> String {
        format!("{}/api/v2/", self.base_url())
    }
}

impl Debug for Auth0Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Auth0Config")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("audience", &self.audience)
            .finish()
    }
}

/// HTTP client for Auth0.
#[derive(Debug, Clone)]
pub struct Auth0Client {
    config: Auth0Config,
    http: Client,
}

impl Auth0Client {
    #[must_use]
    pub fn new(config: Auth0Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Auth0Config {
        &self.config
    }

    /// Obtain a management API access token with the client credentials grant.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn management_token(&self) -> Result<String, Auth0Error> {
        let body = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            audience: self.config.management_audience(),
        };

        let response = self
            .http
            .post(format!("{}/oauth/token", self.config.base_url()))
            .json(&body)
            .send()
            .await?;

        let parsed: TokenResponse = expect_success(response, "token").await?.json().await?;

        Ok(parsed.access_token)
    }

    /// List the roles assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn user_roles(&self, token: &str, user: &UserId) -> Result<Vec<Role>, Auth0Error> {
        let response = self
            .http
            .get(self.user_roles_url(user))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(expect_success(response, "roles").await?.json().await?)
    }

    /// Fetch the tenant's JSON Web Key Set.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn jwks(&self) -> Result<JwkSet, Auth0Error> {
        let response = self
            .http
            .get(format!("{}/.well-known/jwks.json", self.config.base_url()))
            .send()
            .await?;

        Ok(expect_success(response, "jwks").await?.json().await?)
    }

    fn user_roles_url(&self, user: &UserId) -> String {
        format!(
            "{}/api/v2/users/{}/roles",
            self.config.base_url(),
            encode_path_segment(user.as_str())
        )
    }
}

async fn expect_success(response: Response, request: &str) -> Result<Response, Auth0Error> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(Auth0Error::UnexpectedResponse(format!(
        "{request} request failed with status {status}: {text}"
    )))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }

    encoded
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Errors that can occur when communicating with Auth0.
#[derive(Debug, Error)]
pub enum Auth0Error {
    /// An HTTP transport or serialization error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response was not a success or could not be interpreted.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
