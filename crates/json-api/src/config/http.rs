//! HTTP Config

use clap::Args;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Origin allowed to call the API; any origin when unset
    #[arg(long, env = "CORS_ALLOWED_ORIGIN")]
    pub cors_allowed_origin: Option<String>,
}
