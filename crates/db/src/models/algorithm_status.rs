//! Algorithm status entity model and DTOs.

use mlregistry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A status row from the `ml_algorithm_statuses` table.
///
/// Statuses form a history: every lifecycle change inserts a new row rather
/// than mutating an old one. `status` always holds one of the values of
/// [`mlregistry_core::status::AlgorithmStatus`]; the repository rejects
/// anything else before insert.
///
/// The schema does not enforce that at most one row per algorithm has
/// `active = true`. Callers that want that invariant use
/// [`crate::repositories::MlAlgorithmStatusRepo::activate`], which flips the
/// previous active row inside a transaction.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MlAlgorithmStatus {
    pub id: DbId,
    pub algorithm_id: DbId,
    pub status: String,
    pub active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new algorithm status.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMlAlgorithmStatus {
    pub algorithm_id: DbId,
    /// Validated against `AlgorithmStatus` by the repository.
    pub status: String,
    pub active: bool,
    #[validate(length(max = 128))]
    pub created_by: String,
}
