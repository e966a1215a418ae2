//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use ordering_app::auth::UserId;

use crate::responses::ApiError;

const USER_DEPOT_KEY: &str = "user_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_user(&mut self, user: UserId);

    fn user(&self) -> Option<UserId>;

    fn user_or_401(&self) -> Result<UserId, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_user(&mut self, user: UserId) {
        self.insert(USER_DEPOT_KEY, user);
    }

    fn user(&self) -> Option<UserId> {
        self.get::<UserId>(USER_DEPOT_KEY).ok().cloned()
    }

    fn user_or_401(&self) -> Result<UserId, ApiError> {
        self.user().ok_or_else(ApiError::unauthorized)
    }
}
