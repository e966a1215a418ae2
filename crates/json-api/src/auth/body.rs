//! Request body identity middleware.
//!
//! Reads the caller from the `user` field of a JSON body. Only mounted outside
//! production.

use salvo::prelude::*;
use serde::Deserialize;

use ordering_app::auth::UserId;

use crate::extensions::*;

#[derive(Debug, Deserialize)]
struct BodyIdentity {
    user: Option<String>,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if let Some(user) = body_user(req).await {
        depot.insert_user(user);
    }

    ctrl.call_next(req, depot, res).await;
}

async fn body_user(req: &mut Request) -> Option<UserId> {
    let payload = req.payload().await.ok()?;

    serde_json::from_slice::<BodyIdentity>(payload)
        .ok()?
        .user
        .map(|user| user.trim().to_string())
        .filter(|user| !user.is_empty())
        .map(UserId::new)
}
