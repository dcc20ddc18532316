//! Claims repository implementation
//!
//! PostgreSQL adapter for the `domain_claims::ClaimStore` port. Queries use
//! the runtime SQLx API so the crate builds without a live database.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use core_kernel::{AttachmentId, ClaimId, DomainPort, PortError};
use domain_claims::claim as domain;
use domain_claims::{Attachment, AttachmentRecord, Claim, ClaimRecord, ClaimStore};

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str =
    "claim_id, lecturer_name, claim_period, hours_worked, hourly_rate, notes, status, created_at";

const ATTACHMENT_COLUMNS: &str =
    "attachment_id, claim_id, file_name, file_type, file_size, file_path, uploaded_at, uploaded_by";

/// Repository for claims and their attachments
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new repository on the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for ClaimsRepository {}

#[async_trait]
impl ClaimStore for ClaimsRepository {
    #[tracing::instrument(skip(self, record), fields(db.table = "claims", db.operation = "insert"))]
    async fn insert_claim(&self, record: ClaimRecord) -> Result<Claim, PortError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            r#"
            INSERT INTO claims (
                lecturer_name, claim_period, hours_worked, hourly_rate,
                notes, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CLAIM_COLUMNS}
            "#
        ))
        .bind(&record.lecturer_name)
        .bind(record.claim_period)
        .bind(record.hours_worked)
        .bind(record.hourly_rate)
        .bind(&record.notes)
        .bind(ClaimStatus::from(record.status))
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    #[tracing::instrument(skip(self), fields(db.table = "claims", db.operation = "select"))]
    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self, claim), fields(db.table = "claims", db.operation = "update", claim_id = %claim.id))]
    async fn update_claim(&self, claim: &Claim) -> Result<(), PortError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET lecturer_name = $2,
                claim_period = $3,
                hours_worked = $4,
                hourly_rate = $5,
                notes = $6,
                status = $7
            WHERE claim_id = $1
            "#,
        )
        .bind(claim.id.as_i64())
        .bind(&claim.lecturer_name)
        .bind(claim.claim_period)
        .bind(claim.hours_worked)
        .bind(claim.hourly_rate)
        .bind(&claim.notes)
        .bind(ClaimStatus::from(claim.status))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Claim", claim.id));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "claims", db.operation = "select"))]
    async fn find_by_lecturer(&self, lecturer_name: &str) -> Result<Vec<Claim>, PortError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            r#"
            SELECT {CLAIM_COLUMNS} FROM claims
            WHERE lecturer_name = $1
            ORDER BY created_at DESC, claim_id DESC
            "#
        ))
        .bind(lecturer_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "claims", db.operation = "select"))]
    async fn find_pending(&self) -> Result<Vec<Claim>, PortError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            r#"
            SELECT {CLAIM_COLUMNS} FROM claims
            WHERE status = $1
            ORDER BY claim_period ASC, claim_id ASC
            "#
        ))
        .bind(ClaimStatus::Pending)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "claims", db.operation = "select"))]
    async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY created_at DESC, claim_id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, record), fields(db.table = "attachments", db.operation = "insert", claim_id = %record.claim_id))]
    async fn insert_attachment(&self, record: AttachmentRecord) -> Result<Attachment, PortError> {
        let row = sqlx::query_as::<_, AttachmentRow>(&format!(
            r#"
            INSERT INTO attachments (
                claim_id, file_name, file_type, file_size,
                file_path, uploaded_at, uploaded_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ATTACHMENT_COLUMNS}
            "#
        ))
        .bind(record.claim_id.as_i64())
        .bind(&record.file_name)
        .bind(&record.file_type)
        .bind(record.file_size)
        .bind(&record.file_path)
        .bind(record.uploaded_at)
        .bind(&record.uploaded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::classify(&e) {
            // The FK to claims is the referential check at this layer
            DatabaseError::MissingReference(_) => {
                PortError::not_found("Claim", record.claim_id)
            }
            other => port_error(other),
        })?;

        Ok(row.into())
    }

    #[tracing::instrument(skip(self), fields(db.table = "attachments", db.operation = "select"))]
    async fn find_attachments(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, PortError> {
        let rows = sqlx::query_as::<_, AttachmentRow>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM attachments WHERE claim_id = $1"
        ))
        .bind(claim_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn map_sqlx_error(error: sqlx::Error) -> PortError {
    port_error(DatabaseError::classify(&error))
}

fn port_error(error: DatabaseError) -> PortError {
    if error.is_unavailable() {
        PortError::connection(error.to_string())
    } else if error.is_rejected_write() {
        PortError::validation(error.to_string())
    } else {
        PortError::internal(error.to_string())
    }
}

/// Claim status as stored in PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "snake_case")]
pub enum ClaimStatus {
    Draft,
    Pending,
    Verified,
    Approved,
    Rejected,
    Settled,
}

impl From<domain::ClaimStatus> for ClaimStatus {
    fn from(status: domain::ClaimStatus) -> Self {
        match status {
            domain::ClaimStatus::Draft => ClaimStatus::Draft,
            domain::ClaimStatus::Pending => ClaimStatus::Pending,
            domain::ClaimStatus::Verified => ClaimStatus::Verified,
            domain::ClaimStatus::Approved => ClaimStatus::Approved,
            domain::ClaimStatus::Rejected => ClaimStatus::Rejected,
            domain::ClaimStatus::Settled => ClaimStatus::Settled,
        }
    }
}

impl From<ClaimStatus> for domain::ClaimStatus {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Draft => domain::ClaimStatus::Draft,
            ClaimStatus::Pending => domain::ClaimStatus::Pending,
            ClaimStatus::Verified => domain::ClaimStatus::Verified,
            ClaimStatus::Approved => domain::ClaimStatus::Approved,
            ClaimStatus::Rejected => domain::ClaimStatus::Rejected,
            ClaimStatus::Settled => domain::ClaimStatus::Settled,
        }
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: i64,
    pub lecturer_name: String,
    pub claim_period: NaiveDate,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    pub notes: Option<String>,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: ClaimId::from_i64(row.claim_id),
            lecturer_name: row.lecturer_name,
            claim_period: row.claim_period,
            hours_worked: row.hours_worked,
            hourly_rate: row.hourly_rate,
            notes: row.notes,
            status: row.status.into(),
            created_at: row.created_at,
        }
    }
}

/// Database row for an attachment
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttachmentRow {
    pub attachment_id: i64,
    pub claim_id: i64,
    pub file_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: Option<String>,
}

impl From<AttachmentRow> for Attachment {
    fn from(row: AttachmentRow) -> Self {
        Attachment {
            id: AttachmentId::from_i64(row.attachment_id),
            claim_id: ClaimId::from_i64(row.claim_id),
            file_name: row.file_name,
            file_type: row.file_type,
            file_size: row.file_size,
            file_path: row.file_path,
            uploaded_at: row.uploaded_at,
            uploaded_by: row.uploaded_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_round_trip() {
        for status in [
            domain::ClaimStatus::Draft,
            domain::ClaimStatus::Pending,
            domain::ClaimStatus::Verified,
            domain::ClaimStatus::Approved,
            domain::ClaimStatus::Rejected,
            domain::ClaimStatus::Settled,
        ] {
            let db: ClaimStatus = status.into();
            let back: domain::ClaimStatus = db.into();
            assert_eq!(status, back);
        }
    }

    #[test]
    fn test_claim_row_conversion() {
        let row = ClaimRow {
            claim_id: 12,
            lecturer_name: "Dr. A. van Wyk".to_string(),
            claim_period: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hours_worked: dec!(50),
            hourly_rate: dec!(250.00),
            notes: None,
            status: ClaimStatus::Draft,
            created_at: Utc::now(),
        };

        let claim: Claim = row.into();

        assert_eq!(claim.id, ClaimId::from_i64(12));
        assert_eq!(claim.amount(), dec!(12500.00));
        assert_eq!(claim.status, domain::ClaimStatus::Draft);
    }

    #[test]
    fn test_attachment_row_conversion() {
        let row = AttachmentRow {
            attachment_id: 3,
            claim_id: 12,
            file_name: "timesheet.pdf".to_string(),
            file_type: "pdf".to_string(),
            file_size: 1024,
            file_path: "/uploads/abc.pdf".to_string(),
            uploaded_at: Utc::now(),
            uploaded_by: Some("a.vanwyk".to_string()),
        };

        let attachment: Attachment = row.into();

        assert_eq!(attachment.id, AttachmentId::from_i64(3));
        assert_eq!(attachment.claim_id, ClaimId::from_i64(12));
        assert_eq!(attachment.file_type, "pdf");
    }
}
