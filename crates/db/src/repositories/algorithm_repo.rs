//! Repository for the `ml_algorithms` table.

use mlregistry_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{fk_to_not_found, DbResult};
use crate::models::algorithm::{CreateMlAlgorithm, MlAlgorithm, UpdateMlAlgorithm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, endpoint_id, name, description, code, version, owner, created_at";

/// Provides CRUD operations for algorithms.
pub struct MlAlgorithmRepo;

impl MlAlgorithmRepo {
    /// Insert a new algorithm under an endpoint, returning the created row.
    ///
    /// Fails with `NotFound` if `input.endpoint_id` does not reference an
    /// existing endpoint, and with `Validation` if any field exceeds its
    /// length bound (`code` tops out at 50000 characters).
    pub async fn create(pool: &PgPool, input: &CreateMlAlgorithm) -> DbResult<MlAlgorithm> {
        input.validate()?;
        let query = format!(
            "INSERT INTO ml_algorithms (endpoint_id, name, description, code, version, owner)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MlAlgorithm>(&query)
            .bind(input.endpoint_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.code)
            .bind(&input.version)
            .bind(&input.owner)
            .fetch_one(pool)
            .await
            .map_err(|e| fk_to_not_found(e, "Endpoint", input.endpoint_id))
    }

    /// Find an algorithm by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<MlAlgorithm>> {
        let query = format!("SELECT {COLUMNS} FROM ml_algorithms WHERE id = $1");
        let algorithm = sqlx::query_as::<_, MlAlgorithm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(algorithm)
    }

    /// List all algorithms attached to an endpoint, newest first.
    pub async fn list_by_endpoint(pool: &PgPool, endpoint_id: DbId) -> DbResult<Vec<MlAlgorithm>> {
        let query = format!(
            "SELECT {COLUMNS} FROM ml_algorithms
             WHERE endpoint_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let algorithms = sqlx::query_as::<_, MlAlgorithm>(&query)
            .bind(endpoint_id)
            .fetch_all(pool)
            .await?;
        Ok(algorithms)
    }

    /// Update an algorithm. Only non-`None` fields in `input` are applied;
    /// `endpoint_id` and `created_at` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMlAlgorithm,
    ) -> DbResult<Option<MlAlgorithm>> {
        input.validate()?;
        let query = format!(
            "UPDATE ml_algorithms SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                code = COALESCE($4, code),
                version = COALESCE($5, version),
                owner = COALESCE($6, owner)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let algorithm = sqlx::query_as::<_, MlAlgorithm>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.code)
            .bind(&input.version)
            .bind(&input.owner)
            .fetch_optional(pool)
            .await?;
        Ok(algorithm)
    }

    /// Delete an algorithm by ID. Returns `true` if a row was removed.
    ///
    /// Cascades to the algorithm's status history and logged requests.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM ml_algorithms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(algorithm_id = id, "deleted algorithm and its subtree");
        }
        Ok(deleted)
    }
}
