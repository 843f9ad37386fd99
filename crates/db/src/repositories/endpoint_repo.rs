//! Repository for the `endpoints` table.

use mlregistry_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::DbResult;
use crate::models::endpoint::{CreateEndpoint, Endpoint, UpdateEndpoint};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner, created_at";

/// Provides CRUD operations for endpoints.
pub struct EndpointRepo;

impl EndpointRepo {
    /// Insert a new endpoint, returning the created row.
    ///
    /// `name` and `owner` must be non-empty and at most 128 characters;
    /// `created_at` is assigned by the database and never updated afterwards.
    pub async fn create(pool: &PgPool, input: &CreateEndpoint) -> DbResult<Endpoint> {
        input.validate()?;
        let query =
            format!("INSERT INTO endpoints (name, owner) VALUES ($1, $2) RETURNING {COLUMNS}");
        let endpoint = sqlx::query_as::<_, Endpoint>(&query)
            .bind(&input.name)
            .bind(&input.owner)
            .fetch_one(pool)
            .await?;
        Ok(endpoint)
    }

    /// Find an endpoint by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Endpoint>> {
        let query = format!("SELECT {COLUMNS} FROM endpoints WHERE id = $1");
        let endpoint = sqlx::query_as::<_, Endpoint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(endpoint)
    }

    /// List all endpoints ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Endpoint>> {
        let query = format!("SELECT {COLUMNS} FROM endpoints ORDER BY created_at DESC, id DESC");
        let endpoints = sqlx::query_as::<_, Endpoint>(&query).fetch_all(pool).await?;
        Ok(endpoints)
    }

    /// Update an endpoint. Only non-`None` fields in `input` are applied;
    /// `created_at` is never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEndpoint,
    ) -> DbResult<Option<Endpoint>> {
        input.validate()?;
        let query = format!(
            "UPDATE endpoints SET
                name = COALESCE($2, name),
                owner = COALESCE($3, owner)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let endpoint = sqlx::query_as::<_, Endpoint>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.owner)
            .fetch_optional(pool)
            .await?;
        Ok(endpoint)
    }

    /// Delete an endpoint by ID. Returns `true` if a row was removed.
    ///
    /// The `ON DELETE CASCADE` foreign keys remove all attached algorithms
    /// and, transitively, their statuses and logged requests in the same
    /// atomic statement.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM endpoints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(endpoint_id = id, "deleted endpoint and its subtree");
        }
        Ok(deleted)
    }
}
