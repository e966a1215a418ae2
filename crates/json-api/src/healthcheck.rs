//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{extensions::*, responses::ApiError, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable
    pub status: String,
}

/// Healthcheck handler
///
/// Reports whether the server can reach its database.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let healthy = match &state.app.db {
        Some(db) => match db.ping().await {
            Ok(()) => true,
            Err(source) => {
                warn!("database healthcheck failed: {source}");
                false
            }
        },
        None => true,
    };

    if !healthy {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::Mocks;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new()
            .hoop(inject(Mocks::new().into_state()))
            .push(Router::with_path("healthcheck").get(handler));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await;

        let body: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "ok");

        Ok(())
    }
}
