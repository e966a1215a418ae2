//! Server configuration module

use clap::Parser;
use thiserror::Error;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    http::HttpConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::{AppEnv, ServerRuntimeConfig},
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod http;
pub(crate) mod observability;
pub(crate) mod server;

/// Configuration that parsed but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Command line or environment parsing failed.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// Bearer tokens cannot be verified without an audience.
    #[error("AUTH0_AUDIENCE is required when APP_ENV is production")]
    MissingAudience,
}

/// Ordering JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "ordering-json", about = "Ordering JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Identity provider settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub http: HttpConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed or is incomplete for
    /// the selected environment.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.server.app_env == AppEnv::Production && self.auth.audience.is_none() {
            return Err(ConfigError::MissingAudience);
        }

        Ok(self)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
