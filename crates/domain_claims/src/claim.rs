//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::error::ClaimError;
use core_kernel::ClaimId;

/// Maximum accepted lecturer name length
pub const MAX_LECTURER_NAME_CHARS: usize = 200;

/// Upper bound on hours worked in a single claim period
pub const MAX_HOURS_WORKED: Decimal = dec!(1000);

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Being edited by the lecturer
    Draft,
    /// Submitted, awaiting review
    Pending,
    /// Verified by a coordinator (declared, not yet produced by any transition)
    Verified,
    /// Approved for payment
    Approved,
    /// Rejected, by a reviewer or by the submission rules
    Rejected,
    /// Paid out (declared, not yet produced by any transition)
    Settled,
}

/// A lecturer's claim for hours worked in a pay period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the store
    pub id: ClaimId,
    /// Lecturer the claim pays out to
    pub lecturer_name: String,
    /// Pay period the claim covers
    pub claim_period: NaiveDate,
    /// Hours worked in the period
    pub hours_worked: Decimal,
    /// Agreed hourly rate, held at 2 decimal places
    pub hourly_rate: Decimal,
    /// Free-text notes; audit lines are appended here
    pub notes: Option<String>,
    /// Status
    pub status: ClaimStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Claim amount, always recomputed from the current hours and rate.
    ///
    /// Never stored or cached; the value cannot diverge from its inputs.
    pub fn amount(&self) -> Decimal {
        self.hours_worked * self.hourly_rate
    }

    /// Appends an audit line to the notes on a new line
    pub fn append_note(&mut self, line: &str) {
        let existing = self.notes.take().unwrap_or_default();
        self.notes = Some(format!("{existing}\n{line}"));
    }
}

/// Caller-supplied payload for creating a claim
///
/// Any `status` carried by the payload is ignored: the engine forces new
/// claims into `Draft`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClaim {
    pub lecturer_name: String,
    pub claim_period: NaiveDate,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<ClaimStatus>,
}

impl NewClaim {
    /// Validates the payload field constraints
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.lecturer_name.is_empty() {
            return Err(ClaimError::Validation(
                "lecturer name must not be empty".to_string(),
            ));
        }
        if self.lecturer_name.chars().count() > MAX_LECTURER_NAME_CHARS {
            return Err(ClaimError::Validation(format!(
                "lecturer name exceeds {MAX_LECTURER_NAME_CHARS} characters"
            )));
        }
        if self.hours_worked < Decimal::ZERO || self.hours_worked > MAX_HOURS_WORKED {
            return Err(ClaimError::Validation(format!(
                "hours worked must be between 0 and {MAX_HOURS_WORKED}"
            )));
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(ClaimError::Validation(
                "hourly rate must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fully-determined claim data handed to the store for insertion
///
/// Everything except the identifier, which the store assigns.
#[derive(Debug, Clone)]
pub struct ClaimRecord {
    pub lecturer_name: String,
    pub claim_period: NaiveDate,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    pub notes: Option<String>,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
}

/// A claim together with its attachments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDetail {
    pub claim: Claim,
    pub attachments: Vec<Attachment>,
}
