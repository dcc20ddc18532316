//! The claim workflow engine
//!
//! Owns every status transition and the automated submission checks. Each
//! operation is one read-decide-write unit against the claim store; the
//! engine never retries and performs no internal parallelism.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use core_kernel::ClaimId;

use crate::attachment::{Attachment, AttachmentPolicy, AttachmentRecord, FileUpload};
use crate::audit::AuditEntry;
use crate::claim::{Claim, ClaimDetail, ClaimRecord, ClaimStatus, NewClaim};
use crate::error::ClaimError;
use crate::ports::{BlobStore, ClaimStore};
use crate::rules::{evaluate_submission, render_report, SubmissionOutcome};

/// Coordinates claims, the submission rules, and the storage collaborators
pub struct ClaimWorkflow {
    store: Arc<dyn ClaimStore>,
    blobs: Arc<dyn BlobStore>,
    attachment_policy: AttachmentPolicy,
}

impl ClaimWorkflow {
    /// Creates a workflow engine with the default attachment policy
    pub fn new(store: Arc<dyn ClaimStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            blobs,
            attachment_policy: AttachmentPolicy::default(),
        }
    }

    /// Replaces the attachment acceptance policy
    pub fn with_attachment_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.attachment_policy = policy;
        self
    }

    /// Creates a claim in Draft status
    ///
    /// Whatever status the payload carries is discarded; the creation
    /// timestamp is set here, once, in UTC.
    #[instrument(skip_all, fields(lecturer = %data.lecturer_name))]
    pub async fn create_claim(&self, data: NewClaim) -> Result<Claim, ClaimError> {
        data.validate()?;

        let record = ClaimRecord {
            lecturer_name: data.lecturer_name,
            claim_period: data.claim_period,
            hours_worked: data.hours_worked,
            hourly_rate: data.hourly_rate.round_dp(2),
            notes: data.notes,
            status: ClaimStatus::Draft,
            created_at: Utc::now(),
        };

        let claim = self.store.insert_claim(record).await?;
        info!(claim_id = %claim.id, "claim created in Draft");
        Ok(claim)
    }

    /// Validates and stores a file against an existing claim
    #[instrument(skip_all, fields(claim_id = %claim_id, file = %upload.file_name))]
    pub async fn add_attachment(
        &self,
        claim_id: ClaimId,
        upload: FileUpload,
        uploaded_by: Option<&str>,
    ) -> Result<Attachment, ClaimError> {
        if upload.content.is_empty() {
            return Err(ClaimError::InvalidInput);
        }

        let extension = upload.extension().ok_or_else(|| ClaimError::UnsupportedType {
            extension: String::new(),
        })?;
        if !self.attachment_policy.allows_extension(&extension) {
            return Err(ClaimError::UnsupportedType { extension });
        }

        let size = upload.content.len() as u64;
        if size > self.attachment_policy.max_bytes {
            return Err(ClaimError::TooLarge {
                size,
                max: self.attachment_policy.max_bytes,
            });
        }

        // Confirm the claim exists before any bytes land in blob storage
        self.require_claim(claim_id).await?;

        let storage_name = format!("{}.{}", Uuid::new_v4(), extension);
        let file_path = self.blobs.write_bytes(&storage_name, &upload.content).await?;

        let attachment = self
            .store
            .insert_attachment(AttachmentRecord {
                claim_id,
                file_name: upload.file_name,
                file_type: extension,
                file_size: size as i64,
                file_path,
                uploaded_at: Utc::now(),
                uploaded_by: uploaded_by.map(str::to_owned),
            })
            .await?;

        info!(attachment_id = %attachment.id, "attachment stored");
        Ok(attachment)
    }

    /// Submits a Draft claim for review, running the automated rules
    ///
    /// A no-op for claims in any other status: the claim is returned
    /// untouched and nothing is persisted.
    #[instrument(skip_all, fields(claim_id = %claim_id))]
    pub async fn submit_for_review(&self, claim_id: ClaimId) -> Result<Claim, ClaimError> {
        let mut claim = self.require_claim(claim_id).await?;
        if claim.status != ClaimStatus::Draft {
            return Ok(claim);
        }

        match evaluate_submission(&claim) {
            SubmissionOutcome::AutoRejected { entry } => {
                claim.status = ClaimStatus::Rejected;
                claim.append_note(&entry.render());
                self.store.update_claim(&claim).await?;
                warn!(claim_id = %claim.id, "claim auto-rejected at submission");
            }
            SubmissionOutcome::Accepted { flags } => {
                if !flags.is_empty() {
                    claim.append_note(&render_report(&flags));
                    info!(claim_id = %claim.id, flags = flags.len(), "automation flags raised");
                }
                claim.status = ClaimStatus::Pending;
                self.store.update_claim(&claim).await?;
                info!(claim_id = %claim.id, "claim moved to Pending");
            }
        }

        Ok(claim)
    }

    /// Approves a Pending claim; a no-op for any other status
    #[instrument(skip_all, fields(claim_id = %claim_id, approved_by = %approved_by))]
    pub async fn approve(&self, claim_id: ClaimId, approved_by: &str) -> Result<Claim, ClaimError> {
        let mut claim = self.require_claim(claim_id).await?;
        if claim.status != ClaimStatus::Pending {
            return Ok(claim);
        }

        claim.status = ClaimStatus::Approved;
        claim.append_note(&AuditEntry::approval(approved_by, Utc::now()).render());
        self.store.update_claim(&claim).await?;
        info!(claim_id = %claim.id, "claim approved");
        Ok(claim)
    }

    /// Rejects a Pending claim with a reason; a no-op for any other status
    #[instrument(skip_all, fields(claim_id = %claim_id, rejected_by = %rejected_by))]
    pub async fn reject(
        &self,
        claim_id: ClaimId,
        rejected_by: &str,
        reason: &str,
    ) -> Result<Claim, ClaimError> {
        let mut claim = self.require_claim(claim_id).await?;
        if claim.status != ClaimStatus::Pending {
            return Ok(claim);
        }

        claim.status = ClaimStatus::Rejected;
        claim.append_note(&AuditEntry::rejection(rejected_by, reason, Utc::now()).render());
        self.store.update_claim(&claim).await?;
        info!(claim_id = %claim.id, "claim rejected");
        Ok(claim)
    }

    /// Fetches one claim with its attachments; `None` when absent
    pub async fn get_claim(&self, claim_id: ClaimId) -> Result<Option<ClaimDetail>, ClaimError> {
        let Some(claim) = self.store.find_claim(claim_id).await? else {
            return Ok(None);
        };
        let attachments = self.store.find_attachments(claim_id).await?;
        Ok(Some(ClaimDetail { claim, attachments }))
    }

    /// All claims for a lecturer (exact name match), newest created first
    pub async fn claims_for_lecturer(&self, lecturer_name: &str) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_by_lecturer(lecturer_name).await?)
    }

    /// All Pending claims, oldest claim period first
    pub async fn pending_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_pending().await?)
    }

    /// All claims, newest created first
    pub async fn all_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_all().await?)
    }

    /// All attachments referencing a claim
    pub async fn attachments_for_claim(
        &self,
        claim_id: ClaimId,
    ) -> Result<Vec<Attachment>, ClaimError> {
        Ok(self.store.find_attachments(claim_id).await?)
    }

    async fn require_claim(&self, claim_id: ClaimId) -> Result<Claim, ClaimError> {
        self.store
            .find_claim(claim_id)
            .await?
            .ok_or(ClaimError::NotFound(claim_id))
    }
}
