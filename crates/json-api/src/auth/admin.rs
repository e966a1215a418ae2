//! Role checks.

use ordering_app::auth::UserId;

use crate::{responses::ApiError, state::State};

/// Require the caller to hold the admin role.
pub(crate) async fn require_admin(state: &State, user: &UserId) -> Result<(), ApiError> {
    if state.app.auth.is_admin(user).await {
        Ok(())
    } else {
        Err(ApiError::unauthorized())
    }
}

/// Require the caller to be `owner` or an admin. The role lookup is skipped for
/// owners.
pub(crate) async fn require_owner_or_admin(
    state: &State,
    user: &UserId,
    owner: &UserId,
) -> Result<(), ApiError> {
    if user == owner {
        return Ok(());
    }

    require_admin(state, user).await
}
