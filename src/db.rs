//! Database connection management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::AppConfig;

/// PostgreSQL connection pool, shared by every repository and service.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect using the configured `postgres_url`.
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        Self::connect_url(&config.postgres_url).await
    }

    /// Connect to an explicit database URL (tests use this directly).
    pub async fn connect_url(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(16)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Cheap liveness probe for the health endpoint.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
