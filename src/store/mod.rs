pub mod models;

pub mod assignments;
pub mod attendance;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod messages;
pub mod resources;
pub mod submissions;
pub mod users;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors raised by the data layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Constraint(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify a failed mutating statement. Postgres integrity errors
    /// (SQLSTATE class 23: foreign key, unique, check) become `Constraint`
    /// with a caller-supplied prefix; everything else passes through.
    pub(crate) fn from_write(err: sqlx::Error, context: &str) -> StoreError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err
                .code()
                .map(|code| code.starts_with("23"))
                .unwrap_or(false)
            {
                return StoreError::Constraint(format!("{}: {}", context, db_err.message()));
            }
        }
        StoreError::Sqlx(err)
    }
}

/// Handle to the relational store. Constructed once by the process entry
/// point and cloned into request state; every data layer operation takes
/// it explicitly.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Open a connection pool against the configured database
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url())
            .await?;

        info!("Connected to database {}", config.name);
        Ok(Self { pool })
    }

    /// Build the pool without opening a connection up front. Used by tests
    /// and tooling that exercise paths which never reach the store.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.url())?;
        Ok(Self { pool })
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Sqlx(sqlx::Error::Migrate(Box::new(e))))?;
        info!("Schema migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
