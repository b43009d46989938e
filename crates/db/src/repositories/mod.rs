//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept the caller's `&mut PgConnection` as the first argument.

use rackmap_core::error::{ErrorKind, QueryError};

pub mod dictionary_repo;
pub mod element_repo;
pub mod group_repo;
pub mod link_repo;
pub mod topology_repo;

pub use dictionary_repo::DictionaryRepo;
pub use element_repo::ElementRepo;
pub use group_repo::GroupRepo;
pub use link_repo::LinkRepo;
pub use topology_repo::TopologyRepo;

/// Classify a sqlx failure as an internal database error, keeping the
/// server's own message when there is one.
pub(crate) fn internal(err: sqlx::Error) -> QueryError {
    match err {
        sqlx::Error::Database(db_err) => QueryError::Database(db_err.message().to_string()),
        other => QueryError::Database(other.to_string()),
    }
}

pub(crate) fn log_failure(operation: &'static str, err: &QueryError) {
    match err.kind() {
        ErrorKind::InternalDatabase => {
            tracing::warn!(operation, error = %err, "Query ended abnormally")
        }
        ErrorKind::BadInput => tracing::info!(operation, error = %err, "Query rejected"),
        ErrorKind::NotFound => tracing::debug!(operation, error = %err, "Query matched nothing"),
    }
}
