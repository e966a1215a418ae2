//! Bearer token identity middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use ordering_app::auth::AuthServiceError;

use crate::{extensions::*, responses::ApiError, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if !req.headers().contains_key(AUTHORIZATION) {
        ctrl.call_next(req, depot, res).await;

        return;
    }

    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized());

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let user = match state.app.auth.authenticate(token).await {
        Ok(user) => user,
        Err(AuthServiceError::Token(source)) => {
            debug!("rejected bearer token: {source}");

            res.render(ApiError::unauthorized());

            return;
        }
        Err(source) => {
            error!("failed to authenticate bearer token: {source}");

            res.render(ApiError::internal());

            return;
        }
    };

    depot.insert_user(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
