//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Where the entity is mutable, an update DTO with all-`Option` fields

pub mod algorithm;
pub mod algorithm_status;
pub mod endpoint;
pub mod request;
