//! Automated submission rules
//!
//! Evaluated once, in a fixed order, when a Draft claim is submitted for
//! review. Rule 1 short-circuits: an auto-rejected claim never reaches the
//! flag rules and never advances to Pending.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::audit::AuditEntry;
use crate::claim::Claim;
use chrono::Utc;

/// Hours above this are flagged for manual review
pub const TYPICAL_HOURS_LIMIT: Decimal = dec!(100);

/// Hourly rates above this are flagged for manual review
pub const STANDARD_RATE_THRESHOLD: Decimal = dec!(300);

/// Header prepended to the flag lines when any flag fires
pub const AUTOMATION_REPORT_HEADER: &str = "-- Automation Report --";

const EXCESSIVE_HOURS_FLAG: &str = "Hours exceed typical limit (100h). Review required.";
const HIGH_RATE_FLAG: &str = "Hourly rate is above standard threshold (R300).";

/// Outcome of evaluating the submission rules against a Draft claim
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// Rule 1 fired: the claim is rejected without further evaluation
    AutoRejected { entry: AuditEntry },
    /// The claim may advance to Pending, possibly with review flags
    Accepted { flags: Vec<AuditEntry> },
}

/// Evaluates the submission rules in their fixed order
pub fn evaluate_submission(claim: &Claim) -> SubmissionOutcome {
    let now = Utc::now();

    // Rule 1: zero or negative hours reject outright
    if claim.hours_worked <= Decimal::ZERO {
        return SubmissionOutcome::AutoRejected {
            entry: AuditEntry::auto_rejection(now),
        };
    }

    let mut flags = Vec::new();

    // Rule 2: excessive hours
    if claim.hours_worked > TYPICAL_HOURS_LIMIT {
        flags.push(AuditEntry::flag(EXCESSIVE_HOURS_FLAG, now));
    }

    // Rule 3: high hourly rate
    if claim.hourly_rate > STANDARD_RATE_THRESHOLD {
        flags.push(AuditEntry::flag(HIGH_RATE_FLAG, now));
    }

    SubmissionOutcome::Accepted { flags }
}

/// Renders the automation report block appended to the claim notes
pub fn render_report(flags: &[AuditEntry]) -> String {
    let lines: Vec<String> = flags.iter().map(AuditEntry::render).collect();
    format!("{}\n{}", AUTOMATION_REPORT_HEADER, lines.join("\n"))
}
