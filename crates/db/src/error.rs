use mlregistry_core::error::CoreError;
use mlregistry_core::types::DbId;

/// Error type for repository operations.
///
/// Wraps [`CoreError`] for domain errors (validation, missing foreign-key
/// targets) and passes database failures through untouched.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `mlregistry_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Convenience type alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl From<validator::ValidationErrors> for DbError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DbError::Core(CoreError::Validation(errors.to_string()))
    }
}

/// Classify a foreign-key violation on insert as a missing parent.
///
/// PostgreSQL reports a violated `REFERENCES` constraint as error code
/// 23503; for an insert that can only mean the referenced parent row does
/// not exist, so it maps to [`CoreError::NotFound`] for that parent. Any
/// other error passes through as [`DbError::Sqlx`].
pub(crate) fn fk_to_not_found(err: sqlx::Error, entity: &'static str, id: DbId) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503") {
            return DbError::Core(CoreError::NotFound { entity, id });
        }
    }
    DbError::Sqlx(err)
}
