//! Error classification for the PostgreSQL adapter

use thiserror::Error;

/// Failure modes the claims database can surface
///
/// Produced by [`DatabaseError::classify`], which buckets SQLx errors by the
/// PostgreSQL error code so callers can map them onto the port error taxonomy
/// without inspecting SQLSTATE strings themselves.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database was unreachable or the pool handed out no connection
    #[error("database unavailable: {0}")]
    Unavailable(String),

    /// A unique index rejected the write (SQLSTATE 23505)
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// A foreign key pointed at a missing row (SQLSTATE 23503)
    #[error("missing referenced row: {0}")]
    MissingReference(String),

    /// A check constraint rejected the row (SQLSTATE 23514)
    #[error("constraint rejected the row: {0}")]
    CheckFailed(String),

    /// The bundled migrations did not apply
    #[error("migration failed: {0}")]
    Migration(String),

    /// Any other statement failure
    #[error("statement failed: {0}")]
    Statement(String),
}

impl DatabaseError {
    /// True when the database was unreachable and a retry could succeed
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DatabaseError::Unavailable(_))
    }

    /// True when PostgreSQL rejected the write on data-integrity grounds
    pub fn is_rejected_write(&self) -> bool {
        matches!(
            self,
            DatabaseError::Duplicate(_)
                | DatabaseError::MissingReference(_)
                | DatabaseError::CheckFailed(_)
        )
    }

    /// Buckets a SQLx error by its PostgreSQL error code
    ///
    /// 23505, 23503, and 23514 are the only integrity codes this schema can
    /// raise; everything else is a plain statement failure.
    pub fn classify(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::Unavailable(error.to_string())
            }
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some("23505") => DatabaseError::Duplicate(db.message().to_string()),
                Some("23503") => DatabaseError::MissingReference(db.message().to_string()),
                Some("23514") => DatabaseError::CheckFailed(db.message().to_string()),
                _ => DatabaseError::Statement(db.message().to_string()),
            },
            other => DatabaseError::Statement(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let error = DatabaseError::classify(&sqlx::Error::PoolTimedOut);
        assert!(error.is_unavailable());
        assert!(!error.is_rejected_write());
    }

    #[test]
    fn test_row_not_found_is_a_statement_failure() {
        // Absent rows are reported as Ok(None) by the repository, so a
        // RowNotFound reaching classification is a plain statement failure.
        let error = DatabaseError::classify(&sqlx::Error::RowNotFound);
        assert!(matches!(error, DatabaseError::Statement(_)));
    }

    #[test]
    fn test_integrity_variants_are_rejected_writes() {
        assert!(DatabaseError::Duplicate("claims_pkey".into()).is_rejected_write());
        assert!(DatabaseError::MissingReference("attachments_claim_id_fkey".into())
            .is_rejected_write());
        assert!(DatabaseError::CheckFailed("hours_worked".into()).is_rejected_write());
        assert!(!DatabaseError::Statement("syntax".into()).is_rejected_write());
    }
}
