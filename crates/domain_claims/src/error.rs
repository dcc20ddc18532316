//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, PortError};

/// Errors that can occur in the claims workflow
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid file upload: file is missing or empty")]
    InvalidInput,

    #[error("Unsupported file type '{extension}'")]
    UnsupportedType { extension: String },

    #[error("File too large: {size} bytes exceeds the {max} byte maximum")]
    TooLarge { size: u64, max: u64 },

    #[error(transparent)]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Returns true if the referenced claim does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::NotFound(_))
    }
}
