//! Observability lifecycle.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Initialize structured logging and request thresholds.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);
        logging::init_subscriber(config)?;

        Ok(Self)
    }
}
