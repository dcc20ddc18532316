//! Attachments and the upload acceptance policy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use core_kernel::{AttachmentId, ClaimId};

/// Default upload size ceiling: 5 MiB
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// A supporting file stored against a claim
///
/// Immutable once created; only read or removed alongside its claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier, assigned by the store
    pub id: AttachmentId,
    /// Owning claim
    pub claim_id: ClaimId,
    /// Original display file name
    pub file_name: String,
    /// Lower-cased extension without the leading dot
    pub file_type: String,
    /// Size in bytes
    pub file_size: i64,
    /// Storage path/locator returned by the blob store
    pub file_path: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Uploader identity, when known
    pub uploaded_by: Option<String>,
}

/// Attachment data handed to the store for insertion
#[derive(Debug, Clone)]
pub struct AttachmentRecord {
    pub claim_id: ClaimId,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: Option<String>,
}

/// An incoming file upload: display name plus raw content
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Lower-cased extension after the last dot, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

/// Which uploads a claim will accept
///
/// The allow-list and size ceiling are policy, not engine literals; they are
/// loadable from the environment and default to the standard document set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPolicy {
    /// Accepted extensions, lower-cased, without leading dots
    pub allowed_extensions: BTreeSet<String>,
    /// Maximum accepted upload size in bytes
    pub max_bytes: u64,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: ["pdf", "docx", "xlsx"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            max_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

impl AttachmentPolicy {
    /// Loads overrides from `CLAIMS_ATTACHMENT_*` environment variables
    ///
    /// `CLAIMS_ATTACHMENT_ALLOWED_EXTENSIONS` is a comma-separated list;
    /// `CLAIMS_ATTACHMENT_MAX_BYTES` an integer. Unset variables keep the
    /// defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let source = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CLAIMS_ATTACHMENT")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_extensions"),
            )
            .build()?;

        let mut policy = Self::default();
        if let Ok(extensions) = source.get::<Vec<String>>("allowed_extensions") {
            policy.allowed_extensions = extensions
                .into_iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
        }
        if let Ok(max_bytes) = source.get::<u64>("max_bytes") {
            policy.max_bytes = max_bytes;
        }
        Ok(policy)
    }

    /// Whether the (already lower-cased) extension is on the allow-list
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = AttachmentPolicy::default();
        assert!(policy.allows_extension("pdf"));
        assert!(policy.allows_extension("docx"));
        assert!(policy.allows_extension("xlsx"));
        assert!(!policy.allows_extension("exe"));
        assert_eq!(policy.max_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_extension_is_lowercased() {
        let upload = FileUpload::new("Timesheet.PDF", vec![1]);
        assert_eq!(upload.extension().as_deref(), Some("pdf"));
    }

    #[test]
    fn test_extension_takes_last_dot() {
        let upload = FileUpload::new("march.2024.xlsx", vec![1]);
        assert_eq!(upload.extension().as_deref(), Some("xlsx"));
    }

    #[test]
    fn test_missing_extension() {
        assert_eq!(FileUpload::new("notes", vec![1]).extension(), None);
        assert_eq!(FileUpload::new(".gitignore", vec![1]).extension(), None);
        assert_eq!(FileUpload::new("report.", vec![1]).extension(), None);
    }
}
