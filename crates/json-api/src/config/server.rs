//! Server Config

use clap::{Args, ValueEnum};

/// Deployment environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AppEnv {
    /// Local development; callers are identified by the request body.
    Development,

    /// Automated test runs; callers are identified by the request body.
    Test,

    /// Callers are identified by verified bearer tokens.
    Production,
}

impl AppEnv {
    /// Whether callers must present a verified bearer token.
    #[must_use]
    pub fn verifies_tokens(self) -> bool {
        self == Self::Production
    }
}

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Deployment environment (development, test, production)
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = AppEnv::Development)]
    pub app_env: AppEnv,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
