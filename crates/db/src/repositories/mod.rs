//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Validation failures and
//! missing foreign-key targets surface as [`crate::DbError::Core`];
//! everything else is a passthrough database error.

pub mod algorithm_repo;
pub mod algorithm_status_repo;
pub mod endpoint_repo;
pub mod request_repo;

pub use algorithm_repo::MlAlgorithmRepo;
pub use algorithm_status_repo::MlAlgorithmStatusRepo;
pub use endpoint_repo::EndpointRepo;
pub use request_repo::MlRequestRepo;
