//! In-memory port implementations
//!
//! Back the workflow engine in tests without a database or filesystem. The
//! claim store mimics the PostgreSQL adapter's contract: sequential integer
//! identifiers and the documented query orderings.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{AttachmentId, ClaimId, DomainPort, PortError};
use domain_claims::{
    Attachment, AttachmentRecord, Claim, ClaimRecord, ClaimStatus, ClaimStore, BlobStore,
};

#[derive(Default)]
struct StoreInner {
    claims: BTreeMap<i64, Claim>,
    attachments: BTreeMap<i64, Attachment>,
    next_claim_id: i64,
    next_attachment_id: i64,
}

/// In-memory `ClaimStore`
#[derive(Default)]
pub struct InMemoryClaimStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of claims currently held
    pub fn claim_count(&self) -> usize {
        self.inner.lock().expect("store lock").claims.len()
    }

    /// Direct read of a stored claim, bypassing the port
    pub fn claim_snapshot(&self, id: ClaimId) -> Option<Claim> {
        self.inner
            .lock()
            .expect("store lock")
            .claims
            .get(&id.as_i64())
            .cloned()
    }

    /// Seeds a claim in an arbitrary status, bypassing the engine
    pub fn seed_claim(&self, record: ClaimRecord) -> Claim {
        let mut inner = self.inner.lock().expect("store lock");
        inner.next_claim_id += 1;
        let claim = Claim {
            id: ClaimId::from_i64(inner.next_claim_id),
            lecturer_name: record.lecturer_name,
            claim_period: record.claim_period,
            hours_worked: record.hours_worked,
            hourly_rate: record.hourly_rate,
            notes: record.notes,
            status: record.status,
            created_at: record.created_at,
        };
        inner.claims.insert(claim.id.as_i64(), claim.clone());
        claim
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn insert_claim(&self, record: ClaimRecord) -> Result<Claim, PortError> {
        Ok(self.seed_claim(record))
    }

    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let inner = self.inner.lock().expect("store lock");
        Ok(inner.claims.get(&id.as_i64()).cloned())
    }

    async fn update_claim(&self, claim: &Claim) -> Result<(), PortError> {
        let mut inner = self.inner.lock().expect("store lock");
        if !inner.claims.contains_key(&claim.id.as_i64()) {
            return Err(PortError::not_found("Claim", claim.id));
        }
        inner.claims.insert(claim.id.as_i64(), claim.clone());
        Ok(())
    }

    async fn find_by_lecturer(&self, lecturer_name: &str) -> Result<Vec<Claim>, PortError> {
        let inner = self.inner.lock().expect("store lock");
        let mut claims: Vec<Claim> = inner
            .claims
            .values()
            .filter(|c| c.lecturer_name == lecturer_name)
            .cloned()
            .collect();
        claims.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(claims)
    }

    async fn find_pending(&self) -> Result<Vec<Claim>, PortError> {
        let inner = self.inner.lock().expect("store lock");
        let mut claims: Vec<Claim> = inner
            .claims
            .values()
            .filter(|c| c.status == ClaimStatus::Pending)
            .cloned()
            .collect();
        claims.sort_by(|a, b| a.claim_period.cmp(&b.claim_period).then(a.id.cmp(&b.id)));
        Ok(claims)
    }

    async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
        let inner = self.inner.lock().expect("store lock");
        let mut claims: Vec<Claim> = inner.claims.values().cloned().collect();
        claims.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(claims)
    }

    async fn insert_attachment(&self, record: AttachmentRecord) -> Result<Attachment, PortError> {
        let mut inner = self.inner.lock().expect("store lock");
        if !inner.claims.contains_key(&record.claim_id.as_i64()) {
            return Err(PortError::not_found("Claim", record.claim_id));
        }
        inner.next_attachment_id += 1;
        let attachment = Attachment {
            id: AttachmentId::from_i64(inner.next_attachment_id),
            claim_id: record.claim_id,
            file_name: record.file_name,
            file_type: record.file_type,
            file_size: record.file_size,
            file_path: record.file_path,
            uploaded_at: record.uploaded_at,
            uploaded_by: record.uploaded_by,
        };
        inner
            .attachments
            .insert(attachment.id.as_i64(), attachment.clone());
        Ok(attachment)
    }

    async fn find_attachments(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, PortError> {
        let inner = self.inner.lock().expect("store lock");
        Ok(inner
            .attachments
            .values()
            .filter(|a| a.claim_id == claim_id)
            .cloned()
            .collect())
    }
}

/// In-memory `BlobStore`
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs written
    pub fn blob_count(&self) -> usize {
        self.blobs.lock().expect("blob lock").len()
    }

    /// Content written under `name`, if any
    pub fn blob(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.lock().expect("blob lock").get(name).cloned()
    }
}

impl DomainPort for InMemoryBlobStore {}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn write_bytes(&self, name: &str, content: &[u8]) -> Result<String, PortError> {
        let mut blobs = self.blobs.lock().expect("blob lock");
        blobs.insert(name.to_string(), content.to_vec());
        Ok(format!("/uploads/{name}"))
    }
}
