//! Connection pool setup for the claims database

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::error::DatabaseError;

/// Pool alias used across the adapter
pub type DatabasePool = PgPool;

/// Connection settings for the claims database
///
/// Plain public fields; override with struct-update syntax or load from the
/// environment:
///
/// ```rust
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig {
///     max_connections: 20,
///     ..DatabaseConfig::new("postgres://localhost/contract_claims")
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Connections kept open even when idle
    pub min_connections: u32,
    /// How long to wait for a connection from the pool
    pub acquire_timeout: Duration,
    /// Lifetime after which a connection is recycled
    pub max_lifetime: Duration,
    /// Idle time after which a connection above the minimum is closed
    pub idle_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/contract_claims".to_string(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(30),
            max_lifetime: Duration::from_secs(30 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }
}

impl DatabaseConfig {
    /// Default settings against the given connection string
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Loads overrides from `CLAIMS_DB_*` environment variables
    ///
    /// Recognizes `CLAIMS_DB_URL`, `CLAIMS_DB_MAX_CONNECTIONS`, and
    /// `CLAIMS_DB_MIN_CONNECTIONS`; unset variables keep the defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let source = config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS_DB"))
            .build()?;

        let mut settings = Self::default();
        if let Ok(url) = source.get::<String>("url") {
            settings.url = url;
        }
        if let Ok(max) = source.get::<u32>("max_connections") {
            settings.max_connections = max;
        }
        if let Ok(min) = source.get::<u32>("min_connections") {
            settings.min_connections = min;
        }
        Ok(settings)
    }

    /// Opens the pool described by this configuration
    pub async fn connect(&self) -> Result<DatabasePool, DatabaseError> {
        info!(
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            "opening claims database pool"
        );

        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .max_lifetime(self.max_lifetime)
            .idle_timeout(self.idle_timeout)
            .connect(&self.url)
            .await
            .map_err(|e| DatabaseError::Unavailable(e.to_string()))
    }
}

/// Applies the SQL migrations bundled with this crate
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))
}
