//! Infrastructure Database Layer
//!
//! PostgreSQL adapter for the claims system, implementing the
//! `domain_claims::ClaimStore` port with SQLx.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{ClaimsRepository, DatabaseConfig};
//!
//! let pool = DatabaseConfig::from_env()?.connect().await?;
//! infra_db::run_migrations(&pool).await?;
//! let store = ClaimsRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::claims::ClaimsRepository;
