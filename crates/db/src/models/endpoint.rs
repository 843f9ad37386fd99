//! Endpoint entity model and DTOs.

use mlregistry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An endpoint row from the `endpoints` table.
///
/// An endpoint is a named, owned API surface grouping one or more algorithm
/// versions. It is the root of the ownership hierarchy: deleting it cascades
/// to all attached algorithms, their statuses, and their logged requests.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Endpoint {
    pub id: DbId,
    pub name: String,
    pub owner: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEndpoint {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub owner: String,
}

/// DTO for updating an existing endpoint. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEndpoint {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub owner: Option<String>,
}
