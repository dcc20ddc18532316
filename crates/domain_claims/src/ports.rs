//! Port traits the workflow engine consumes
//!
//! Adapters live in the infrastructure crates (`infra_db`, `infra_storage`);
//! `test_utils` provides in-memory implementations for tests.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::attachment::{Attachment, AttachmentRecord};
use crate::claim::{Claim, ClaimRecord};

/// Persistence port for claims and attachment records
///
/// Implementations own identifier assignment and the query orderings; the
/// engine relies on them. Concurrent mutations of the same claim are the
/// store's problem: an implementation using optimistic checks reports a lost
/// update as [`PortError::Conflict`], which the engine propagates unretried.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Persists a new claim and returns it with its assigned identifier
    async fn insert_claim(&self, record: ClaimRecord) -> Result<Claim, PortError>;

    /// Fetches a claim by identifier; absent is `Ok(None)`, not an error
    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Writes back a mutated claim
    async fn update_claim(&self, claim: &Claim) -> Result<(), PortError>;

    /// All claims for an exact lecturer name, newest created first
    async fn find_by_lecturer(&self, lecturer_name: &str) -> Result<Vec<Claim>, PortError>;

    /// All Pending claims, ascending by claim period
    async fn find_pending(&self) -> Result<Vec<Claim>, PortError>;

    /// All claims, newest created first
    async fn find_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Persists a new attachment row and returns it with its identifier
    async fn insert_attachment(&self, record: AttachmentRecord) -> Result<Attachment, PortError>;

    /// All attachments referencing a claim, unordered
    async fn find_attachments(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, PortError>;
}

/// Binary storage port for attachment content
#[async_trait]
pub trait BlobStore: DomainPort {
    /// Writes `content` under `name` and returns the stored path/locator
    ///
    /// The caller generates a collision-resistant name before calling.
    async fn write_bytes(&self, name: &str, content: &[u8]) -> Result<String, PortError>;
}
