//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal architecture pattern used across the
//! claims system. The workflow engine talks to persistence and blob storage
//! exclusively through port traits defined in the domain crate; adapters in
//! the infrastructure crates implement those traits.
//!
//! ```rust,ignore
//! // In domain_claims/src/ports.rs
//! #[async_trait]
//! pub trait ClaimStore: DomainPort {
//!     async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;
//! }
//!
//! // In infra_db - PostgreSQL adapter
//! impl ClaimStore for ClaimsRepository { ... }
//! ```

use std::fmt;
use thiserror::Error;

/// The single error type every port implementation reports through
///
/// Adapters fold their internal failures into these buckets so the engine
/// never handles adapter-specific error types.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity does not exist in the backing store
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The backing store refused the data
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The operation lost a write race against a concurrent mutation
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The backing system was unreachable
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything the other buckets do not cover
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// True for failures that may succeed if the caller retries
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }

    /// True when the entity named in the operation was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait every port extends
///
/// Guarantees port trait objects are thread-safe and usable from async
/// contexts.
pub trait DomainPort: Send + Sync + 'static {}
