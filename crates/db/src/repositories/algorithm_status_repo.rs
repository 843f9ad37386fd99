//! Repository for the `ml_algorithm_statuses` table.

use mlregistry_core::status::AlgorithmStatus;
use mlregistry_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{fk_to_not_found, DbResult};
use crate::models::algorithm_status::{CreateMlAlgorithmStatus, MlAlgorithmStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, algorithm_id, status, active, created_by, created_at";

/// Provides CRUD and activation operations for algorithm statuses.
pub struct MlAlgorithmStatusRepo;

impl MlAlgorithmStatusRepo {
    /// Record a new status for an algorithm, returning the created row.
    ///
    /// `input.status` must be one of the recognized values
    /// (`testing`, `staging`, `production`, `ab_testing`); anything else
    /// fails with `Validation` and nothing is persisted. Fails with
    /// `NotFound` if `input.algorithm_id` does not reference an existing
    /// algorithm.
    ///
    /// Makes no exclusivity guarantee about `active`; use [`Self::activate`]
    /// when at most one status per algorithm may be active.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMlAlgorithmStatus,
    ) -> DbResult<MlAlgorithmStatus> {
        let status: AlgorithmStatus = input.status.parse()?;
        input.validate()?;
        let query = format!(
            "INSERT INTO ml_algorithm_statuses (algorithm_id, status, active, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MlAlgorithmStatus>(&query)
            .bind(input.algorithm_id)
            .bind(status.as_str())
            .bind(input.active)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
            .map_err(|e| fk_to_not_found(e, "MlAlgorithm", input.algorithm_id))
    }

    /// Record a new active status, un-marking any previously active status
    /// for the same algorithm. Uses a transaction to ensure atomicity, so
    /// concurrent callers cannot leave two rows active.
    ///
    /// `input.active` is ignored; the inserted row is always active.
    pub async fn activate(
        pool: &PgPool,
        input: &CreateMlAlgorithmStatus,
    ) -> DbResult<MlAlgorithmStatus> {
        let status: AlgorithmStatus = input.status.parse()?;
        input.validate()?;

        let mut tx = pool.begin().await?;

        // Unmark current active (if any)
        let flipped = sqlx::query(
            "UPDATE ml_algorithm_statuses SET active = false
             WHERE algorithm_id = $1 AND active = true",
        )
        .bind(input.algorithm_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO ml_algorithm_statuses (algorithm_id, status, active, created_by)
             VALUES ($1, $2, true, $3)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, MlAlgorithmStatus>(&query)
            .bind(input.algorithm_id)
            .bind(status.as_str())
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| fk_to_not_found(e, "MlAlgorithm", input.algorithm_id))?;

        tx.commit().await?;

        tracing::debug!(
            algorithm_id = input.algorithm_id,
            status = status.as_str(),
            deactivated = flipped.rows_affected(),
            "activated algorithm status"
        );
        Ok(created)
    }

    /// Find a status record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<MlAlgorithmStatus>> {
        let query = format!("SELECT {COLUMNS} FROM ml_algorithm_statuses WHERE id = $1");
        let status = sqlx::query_as::<_, MlAlgorithmStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(status)
    }

    /// List an algorithm's status history, newest first.
    pub async fn list_by_algorithm(
        pool: &PgPool,
        algorithm_id: DbId,
    ) -> DbResult<Vec<MlAlgorithmStatus>> {
        let query = format!(
            "SELECT {COLUMNS} FROM ml_algorithm_statuses
             WHERE algorithm_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let statuses = sqlx::query_as::<_, MlAlgorithmStatus>(&query)
            .bind(algorithm_id)
            .fetch_all(pool)
            .await?;
        Ok(statuses)
    }

    /// Find the most recent active status for an algorithm (if any).
    pub async fn find_active(
        pool: &PgPool,
        algorithm_id: DbId,
    ) -> DbResult<Option<MlAlgorithmStatus>> {
        let query = format!(
            "SELECT {COLUMNS} FROM ml_algorithm_statuses
             WHERE algorithm_id = $1 AND active = true
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        let status = sqlx::query_as::<_, MlAlgorithmStatus>(&query)
            .bind(algorithm_id)
            .fetch_optional(pool)
            .await?;
        Ok(status)
    }

    /// Delete a status record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM ml_algorithm_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
