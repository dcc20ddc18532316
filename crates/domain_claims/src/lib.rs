//! Claims Workflow Domain
//!
//! This crate implements the lecturer claim lifecycle from draft creation
//! through automated submission checks to approval or rejection.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft --submit, hours<=0--> Rejected
//! Draft --submit, hours>0---> Pending
//! Pending --approve----------> Approved
//! Pending --reject-----------> Rejected
//! ```
//!
//! `Verified` and `Settled` are declared statuses with no transitions yet.

pub mod attachment;
pub mod audit;
pub mod claim;
pub mod engine;
pub mod error;
pub mod ports;
pub mod rules;

pub use attachment::{Attachment, AttachmentPolicy, AttachmentRecord, FileUpload};
pub use audit::{AuditEntry, AuditKind};
pub use claim::{Claim, ClaimDetail, ClaimRecord, ClaimStatus, NewClaim};
pub use engine::ClaimWorkflow;
pub use error::ClaimError;
pub use ports::{BlobStore, ClaimStore};
pub use rules::{evaluate_submission, SubmissionOutcome};
