//! Auth Config

use std::time::Duration;

use clap::Args;
use ordering_app::auth::{Auth0Config, AuthSettings};
use zeroize::Zeroizing;

/// Auth0 settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Auth0 tenant domain
    #[arg(long = "auth0-domain", env = "AUTH0_DOMAIN")]
    pub domain: String,

    /// Machine-to-machine client id for the management API
    #[arg(long = "auth0-mgmt-client-id", env = "AUTH0_MGMT_CLIENT_ID")]
    pub client_id: String,

    /// Machine-to-machine client secret for the management API
    #[arg(
        long = "auth0-mgmt-client-secret",
        env = "AUTH0_MGMT_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: String,

    /// API audience expected in access tokens
    #[arg(long = "auth0-audience", env = "AUTH0_AUDIENCE")]
    pub audience: Option<String>,

    /// Admin identity used by the integration tests
    #[arg(long = "auth0-admin-id", env = "AUTH0_ADMIN_ID")]
    pub admin_id: Option<String>,

    /// Regular identity used by the integration tests
    #[arg(long = "auth0-user-id", env = "AUTH0_USER_ID")]
    pub user_id: Option<String>,

    /// Seconds an admin role lookup is reused (0 disables caching)
    #[arg(long, env = "ADMIN_CACHE_TTL_SECONDS", default_value_t = 30_u64)]
    pub admin_cache_ttl_seconds: u64,
}

impl AuthConfig {
    /// Build the identity provider settings used by the app context.
    #[must_use]
    pub fn settings(&self, verify_tokens: bool) -> AuthSettings {
        AuthSettings {
            auth0: Auth0Config {
                domain: self.domain.clone(),
                client_id: self.client_id.clone(),
                client_secret: Zeroizing::new(self.client_secret.clone()),
                audience: self.audience.clone(),
            },
            admin_cache_ttl: Duration::from_secs(self.admin_cache_ttl_seconds),
            verify_tokens,
        }
    }
}
