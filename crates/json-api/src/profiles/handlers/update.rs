//! Update Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::require_admin,
    extensions::*,
    profiles::{errors::into_api_error, requests::ProfileRequest},
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Update Profile Handler
///
/// Replaces the business profile. Only its owner may update it, and only while
/// they still hold the admin role.
#[endpoint(
    tags("profile"),
    summary = "Update Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let profile = state
        .app
        .profiles
        .get_profile()
        .await
        .map_err(into_api_error)?;

    if profile.user_id != user {
        return Err(ApiError::unauthorized());
    }

    require_admin(state, &user).await?;

    let details = req.body_or_default::<ProfileRequest>().await?.validate()?;

    state
        .app
        .profiles
        .update_profile(&user, details)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Profile updated."))
}
