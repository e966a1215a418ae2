//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired from the pool.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when a migration fails or the applied history diverges.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    /// Round trip a trivial query.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    /// Close every pooled connection, waiting for checked out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}
