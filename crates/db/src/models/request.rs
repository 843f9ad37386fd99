//! Inference request log entity model and DTOs.

use mlregistry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Maximum length, in characters, of each request payload field.
pub const MAX_PAYLOAD_CHARS: u64 = 10_000;

/// A request row from the `ml_requests` table.
///
/// One logged inference call. `input_data`, `response`, and `feedback` carry
/// JSON produced by the caller; this layer stores them as opaque bounded
/// strings and never parses them. `feedback` starts empty and is the only
/// field mutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MlRequest {
    pub id: DbId,
    pub algorithm_id: DbId,
    pub input_data: String,
    pub full_response: String,
    pub response: String,
    pub feedback: String,
    pub created_at: Timestamp,
}

/// DTO for logging a new inference request. `feedback` is initialized empty
/// and submitted later via `update_feedback`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMlRequest {
    pub algorithm_id: DbId,
    #[validate(length(max = 10000))]
    pub input_data: String,
    #[validate(length(max = 10000))]
    pub full_response: String,
    #[validate(length(max = 10000))]
    pub response: String,
}
