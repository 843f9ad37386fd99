//! Repository for the `ml_requests` table.

use mlregistry_core::error::CoreError;
use mlregistry_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{fk_to_not_found, DbError, DbResult};
use crate::models::request::{CreateMlRequest, MlRequest, MAX_PAYLOAD_CHARS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, algorithm_id, input_data, full_response, response, feedback, created_at";

/// Provides logging and feedback operations for inference requests.
pub struct MlRequestRepo;

impl MlRequestRepo {
    /// Log a new inference request, returning the created row.
    ///
    /// `feedback` is initialized empty; submit it later via
    /// [`Self::update_feedback`]. Fails with `NotFound` if
    /// `input.algorithm_id` does not reference an existing algorithm.
    pub async fn create(pool: &PgPool, input: &CreateMlRequest) -> DbResult<MlRequest> {
        input.validate()?;
        let query = format!(
            "INSERT INTO ml_requests (algorithm_id, input_data, full_response, response)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MlRequest>(&query)
            .bind(input.algorithm_id)
            .bind(&input.input_data)
            .bind(&input.full_response)
            .bind(&input.response)
            .fetch_one(pool)
            .await
            .map_err(|e| fk_to_not_found(e, "MlAlgorithm", input.algorithm_id))
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<MlRequest>> {
        let query = format!("SELECT {COLUMNS} FROM ml_requests WHERE id = $1");
        let request = sqlx::query_as::<_, MlRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(request)
    }

    /// List all requests logged against an algorithm, newest first.
    pub async fn list_by_algorithm(pool: &PgPool, algorithm_id: DbId) -> DbResult<Vec<MlRequest>> {
        let query = format!(
            "SELECT {COLUMNS} FROM ml_requests
             WHERE algorithm_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let requests = sqlx::query_as::<_, MlRequest>(&query)
            .bind(algorithm_id)
            .fetch_all(pool)
            .await?;
        Ok(requests)
    }

    /// Overwrite a request's feedback. Feedback is the only field mutable
    /// after creation; all other columns are left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_feedback(
        pool: &PgPool,
        id: DbId,
        feedback: &str,
    ) -> DbResult<Option<MlRequest>> {
        if feedback.chars().count() as u64 > MAX_PAYLOAD_CHARS {
            return Err(DbError::Core(CoreError::Validation(format!(
                "feedback exceeds {MAX_PAYLOAD_CHARS} characters"
            ))));
        }
        let query =
            format!("UPDATE ml_requests SET feedback = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let request = sqlx::query_as::<_, MlRequest>(&query)
            .bind(id)
            .bind(feedback)
            .fetch_optional(pool)
            .await?;
        Ok(request)
    }

    /// Delete a request by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM ml_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
