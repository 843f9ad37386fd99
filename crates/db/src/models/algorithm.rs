//! Algorithm entity model and DTOs.

use mlregistry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An algorithm row from the `ml_algorithms` table.
///
/// One versioned implementation attached to exactly one endpoint. `code`
/// holds the raw source text of the implementation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MlAlgorithm {
    pub id: DbId,
    pub endpoint_id: DbId,
    pub name: String,
    pub description: String,
    pub code: String,
    pub version: String,
    pub owner: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new algorithm.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMlAlgorithm {
    pub endpoint_id: DbId,
    #[validate(length(max = 128))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: String,
    #[validate(length(max = 50000))]
    pub code: String,
    #[validate(length(max = 128))]
    pub version: String,
    #[validate(length(max = 128))]
    pub owner: String,
}

/// DTO for updating an existing algorithm. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMlAlgorithm {
    #[validate(length(max = 128))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(max = 50000))]
    pub code: Option<String>,
    #[validate(length(max = 128))]
    pub version: Option<String>,
    #[validate(length(max = 128))]
    pub owner: Option<String>,
}
