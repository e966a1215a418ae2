//! Create Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use ordering_app::domain::profiles::{ProfilesServiceError, data::NewProfile};

use crate::{
    auth::require_admin,
    extensions::*,
    profiles::{
        errors::{ALREADY_EXISTS, into_api_error},
        requests::ProfileRequest,
    },
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Create Profile Handler
///
/// Creates the business profile, owned by the calling admin. Only one
/// profile may exist.
#[endpoint(
    tags("profile"),
    summary = "Create Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    match state.app.profiles.get_profile().await {
        Ok(_) => return Err(ApiError::unauthorized_with(ALREADY_EXISTS)),
        Err(ProfilesServiceError::NotFound) => {}
        Err(error) => return Err(into_api_error(error)),
    }

    let details = req.body_or_default::<ProfileRequest>().await?.validate()?;

    state
        .app
        .profiles
        .create_profile(NewProfile {
            user_id: user,
            details,
        })
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Profile created."))
}
