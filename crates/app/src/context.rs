//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{Auth0AuthService, AuthService, AuthServiceError, AuthSettings},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        profiles::{PgProfilesService, ProfilesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),

    #[error("failed to initialise the identity provider")]
    Auth(#[source] AuthServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub carts: Arc<dyn CartsService>,
    pub profiles: Arc<dyn ProfilesService>,
    pub auth: Arc<dyn AuthService>,

    /// Pool backing the services; `None` when they are not database backed.
    pub db: Option<Db>,
}

impl AppContext {
    /// Build application context from a database URL: connect, migrate and
    /// initialise the identity provider client.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or fetching signing keys fails.
    pub async fn from_config(url: &str, auth: AuthSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        db.migrate().await.map_err(AppInitError::Migrations)?;

        let auth = Auth0AuthService::connect(auth)
            .await
            .map_err(AppInitError::Auth)?;

        Ok(Self::new(db, Arc::new(auth)))
    }

    /// Database backed services sharing one pool.
    #[must_use]
    pub fn new(db: Db, auth: Arc<dyn AuthService>) -> Self {
        Self {
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            profiles: Arc::new(PgProfilesService::new(db.clone())),
            auth,
            db: Some(db),
        }
    }

    /// Release pooled database connections.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
