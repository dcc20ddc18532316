//! Test Data Builders
//!
//! Builder patterns for constructing test payloads with sensible defaults,
//! so tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::{ClaimStatus, NewClaim};

/// Builder for `NewClaim` payloads
pub struct NewClaimBuilder {
    lecturer_name: String,
    claim_period: NaiveDate,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    notes: Option<String>,
    status: Option<ClaimStatus>,
}

impl Default for NewClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewClaimBuilder {
    /// Creates a builder with a clean, unflagged claim: 50 hours at R250.00
    pub fn new() -> Self {
        Self {
            lecturer_name: "Dr. A. van Wyk".to_string(),
            claim_period: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            hours_worked: dec!(50),
            hourly_rate: dec!(250.00),
            notes: None,
            status: None,
        }
    }

    pub fn with_lecturer(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    pub fn with_period(mut self, period: NaiveDate) -> Self {
        self.claim_period = period;
        self
    }

    pub fn with_hours(mut self, hours: Decimal) -> Self {
        self.hours_worked = hours;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets a payload status, which the engine is expected to ignore
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> NewClaim {
        NewClaim {
            lecturer_name: self.lecturer_name,
            claim_period: self.claim_period,
            hours_worked: self.hours_worked,
            hourly_rate: self.hourly_rate,
            notes: self.notes,
            status: self.status,
        }
    }
}
