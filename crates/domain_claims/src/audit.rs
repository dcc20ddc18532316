//! Structured audit entries behind the claim notes field
//!
//! The notes column stays a single free-text string, but every line the
//! engine appends is built from a structured entry first. Rendering is the
//! view; the entry carries the kind, actor, and timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What produced an audit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditKind {
    /// Submission rules rejected the claim outright
    AutoRejection,
    /// Submission rules flagged the claim for manual review
    Flag,
    /// A reviewer approved the claim
    Approval,
    /// A reviewer rejected the claim
    Rejection,
}

/// One audit event appended to a claim's notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub kind: AuditKind,
    pub actor: Option<String>,
    pub at: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    /// The rules engine rejected the claim at submission
    pub fn auto_rejection(at: DateTime<Utc>) -> Self {
        Self {
            kind: AuditKind::AutoRejection,
            actor: None,
            at,
            message: "Zero hours submitted.".to_string(),
        }
    }

    /// The rules engine flagged the claim for manual review
    pub fn flag(message: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            kind: AuditKind::Flag,
            actor: None,
            at,
            message: message.into(),
        }
    }

    /// A reviewer approved the claim
    pub fn approval(actor: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            kind: AuditKind::Approval,
            actor: Some(actor.into()),
            at,
            message: String::new(),
        }
    }

    /// A reviewer rejected the claim with a reason
    pub fn rejection(actor: impl Into<String>, reason: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            kind: AuditKind::Rejection,
            actor: Some(actor.into()),
            at,
            message: reason.into(),
        }
    }

    /// Renders the entry as the note line appended to the claim
    pub fn render(&self) -> String {
        let actor = self.actor.as_deref().unwrap_or("system");
        match self.kind {
            AuditKind::AutoRejection => format!("System Auto-Rejection: {}", self.message),
            AuditKind::Flag => format!("System Flag: {}", self.message),
            AuditKind::Approval => format!("Approved by {} on {}", actor, self.at),
            AuditKind::Rejection => format!(
                "Rejected by {} with reason: '{}' on {}",
                actor, self.message, self.at
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_rejection_renders_literal_note() {
        let entry = AuditEntry::auto_rejection(Utc::now());
        assert_eq!(
            entry.render(),
            "System Auto-Rejection: Zero hours submitted."
        );
    }

    #[test]
    fn test_approval_names_the_actor() {
        let entry = AuditEntry::approval("coordinator@uni.ac.za", Utc::now());
        assert!(entry.render().starts_with("Approved by coordinator@uni.ac.za on "));
    }

    #[test]
    fn test_rejection_quotes_the_reason() {
        let entry = AuditEntry::rejection("pm@uni.ac.za", "missing timesheet", Utc::now());
        let line = entry.render();
        assert!(line.contains("Rejected by pm@uni.ac.za"));
        assert!(line.contains("'missing timesheet'"));
    }
}
