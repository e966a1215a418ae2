//! Graceful shutdown on Ctrl+C or SIGTERM.

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// In-flight requests get this long to finish once a signal arrives.
const GRACE_PERIOD: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for a shutdown signal, then stop the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;
            info!("ctrl_c signal received");
        }
        result = terminate() => {
            result?;
            info!("terminate signal received");
        }
    }

    handle.stop_graceful(GRACE_PERIOD);

    Ok(())
}
