//! Pre-built Test Fixtures
//!
//! Ready-to-use payloads for common claim and upload scenarios.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use domain_claims::{FileUpload, NewClaim};

use crate::builders::NewClaimBuilder;

/// Fixture claims covering the submission rule branches
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// 50 hours at R250.00: passes every rule without flags
    pub fn standard() -> NewClaim {
        NewClaimBuilder::new().build()
    }

    /// Zero hours: auto-rejected at submission
    pub fn zero_hours() -> NewClaim {
        NewClaimBuilder::new().with_hours(dec!(0)).build()
    }

    /// 120 hours: fires the excessive-hours flag
    pub fn excessive_hours() -> NewClaim {
        NewClaimBuilder::new().with_hours(dec!(120)).build()
    }

    /// R350 rate: fires the high-rate flag
    pub fn high_rate() -> NewClaim {
        NewClaimBuilder::new().with_rate(dec!(350.00)).build()
    }

    /// 150 hours at R400: fires both flags
    pub fn flagged_both() -> NewClaim {
        NewClaimBuilder::new()
            .with_hours(dec!(150))
            .with_rate(dec!(400.00))
            .build()
    }

    /// A claim for a specific period, for ordering tests
    pub fn for_period(year: i32, month: u32) -> NewClaim {
        NewClaimBuilder::new()
            .with_period(NaiveDate::from_ymd_opt(year, month, 1).expect("valid date"))
            .build()
    }
}

/// Fixture uploads covering the attachment policy branches
pub struct UploadFixtures;

impl UploadFixtures {
    /// A small, acceptable PDF
    pub fn pdf() -> FileUpload {
        FileUpload::new("timesheet.pdf", b"%PDF-1.7 fixture".to_vec())
    }

    /// A small, acceptable DOCX
    pub fn docx() -> FileUpload {
        FileUpload::new("invoice.docx", vec![0x50, 0x4b, 0x03, 0x04])
    }

    /// Extension casing must not matter
    pub fn uppercase_xlsx() -> FileUpload {
        FileUpload::new("HOURS.XLSX", vec![0x50, 0x4b, 0x03, 0x04])
    }

    /// Zero-length content
    pub fn empty() -> FileUpload {
        FileUpload::new("timesheet.pdf", Vec::new())
    }

    /// Extension outside the allow-list
    pub fn executable() -> FileUpload {
        FileUpload::new("payload.exe", vec![0x4d, 0x5a])
    }

    /// No extension at all
    pub fn extensionless() -> FileUpload {
        FileUpload::new("timesheet", vec![1, 2, 3])
    }

    /// One byte over the 5 MiB ceiling
    pub fn oversized_pdf() -> FileUpload {
        FileUpload::new("scans.pdf", vec![0u8; 5 * 1024 * 1024 + 1])
    }
}
