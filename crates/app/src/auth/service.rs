//! Auth service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use moka::future::Cache;
use tracing::{debug, warn};

use crate::auth::{
    Auth0Client, Auth0Config, Auth0Error, AuthServiceError, JwtVerifier, UserId, has_admin_role,
};

const ADMIN_CACHE_CAPACITY: u64 = 10_000;

/// Settings used to build the identity provider backed [`AuthService`].
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub auth0: Auth0Config,

    /// How long an admin lookup is reused. Zero disables caching.
    pub admin_cache_ttl: Duration,

    /// Fetch the key set and verify bearer tokens.
    pub verify_tokens: bool,
}

#[derive(Debug)]
pub struct Auth0AuthService {
    client: Auth0Client,
    verifier: Option<JwtVerifier>,
    admin_cache: Option<Cache<UserId, bool>>,
}

impl Auth0AuthService {
    #[must_use]
    pub fn new(client: Auth0Client, verifier: Option<JwtVerifier>, admin_cache_ttl: Duration) -> Self {
        let admin_cache = (!admin_cache_ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(ADMIN_CACHE_CAPACITY)
                .time_to_live(admin_cache_ttl)
                .build()
        });

        Self {
            client,
            verifier,
            admin_cache,
        }
    }

    /// Build the service, fetching the signing keys when token verification is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error when verification is enabled without an audience, or the key
    /// set cannot be fetched.
    pub async fn connect(settings: AuthSettings) -> Result<Self, AuthServiceError> {
        let client = Auth0Client::new(settings.auth0);

        let verifier = if settings.verify_tokens {
            let audience = client
                .config()
                .audience
                .clone()
                .ok_or(AuthServiceError::MissingAudience)?;

            let jwks = client.jwks().await?;

            Some(JwtVerifier::from_jwks(
                &jwks,
                &client.config().issuer(),
                &audience,
            )?)
        } else {
            None
        };

        Ok(Self::new(client, verifier, settings.admin_cache_ttl))
    }

    async fn lookup_admin(&self, user: &UserId) -> Result<bool, Auth0Error> {
        let token = self.client.management_token().await?;
        let roles = self.client.user_roles(&token, user).await?;

        Ok(has_admin_role(&roles))
    }
}

#[async_trait]
impl AuthService for Auth0AuthService {
    async fn authenticate(&self, token: &str) -> Result<UserId, AuthServiceError> {
        let verifier = self
            .verifier
            .as_ref()
            .ok_or(AuthServiceError::VerificationDisabled)?;

        Ok(verifier.verify(token)?)
    }

    async fn is_admin(&self, user: &UserId) -> bool {
        if let Some(cache) = &self.admin_cache
            && let Some(is_admin) = cache.get(user).await
        {
            debug!(%user, is_admin, "admin lookup served from cache");

            return is_admin;
        }

        match self.lookup_admin(user).await {
            Ok(is_admin) => {
                if let Some(cache) = &self.admin_cache {
                    cache.insert(user.clone(), is_admin).await;
                }

                is_admin
            }
            Err(error) => {
                warn!(%user, %error, "admin role lookup failed; denying");

                false
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the user a bearer token was issued to.
    async fn authenticate(&self, token: &str) -> Result<UserId, AuthServiceError>;

    /// Whether the user holds the admin role. Lookup failures deny.
    async fn is_admin(&self, user: &UserId) -> bool;
}
