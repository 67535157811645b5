//! Record services.
//!
//! Each service wraps one repository and classifies its outcomes:
//!
//! | repository outcome            | lookup (`get_by_id`, ...) | write (`update`, `delete`) |
//! |-------------------------------|---------------------------|----------------------------|
//! | `Ok(Some(record))`            | the record                | n/a                        |
//! | `Ok(None)`                    | `NotFound`                | n/a                        |
//! | `Err(RepositoryError::NotFound)` | `ServiceUnavailable`   | `NotFound`, passed through |
//! | `Err(RepositoryError::Unavailable)` | `ServiceUnavailable` | `ServiceUnavailable`     |
//!
//! Services hold no state besides their repository handle and are cheap to clone.

pub mod encounter;
pub mod patient;

pub use encounter::EncounterService;
pub use patient::PatientService;

use crate::error::{RepositoryError, RepositoryResult, ServiceError, ServiceResult};

/// Existence check shared by `get_by_id`, `update` and `delete`.
pub(crate) fn require_found<T>(
    outcome: RepositoryResult<Option<T>>,
    entity: &'static str,
    id: i64,
) -> ServiceResult<T> {
    match outcome {
        Ok(Some(record)) => Ok(record),
        Ok(None) => {
            tracing::warn!("{} {} not found", entity, id);
            Err(ServiceError::not_found(entity, id))
        }
        Err(e) => Err(storage_failed(entity, "lookup by id", e)),
    }
}

/// Any failure on a read or an insert maps to `ServiceUnavailable`.
pub(crate) fn storage_failed(entity: &str, operation: &str, err: RepositoryError) -> ServiceError {
    tracing::error!("{} {} failed: {}", entity, operation, err);
    ServiceError::unavailable()
}

/// A `NotFound` from a write passes through unchanged; everything else is `ServiceUnavailable`.
pub(crate) fn write_failed(entity: &str, operation: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound(message) => {
            tracing::warn!("{} {} found no row: {}", entity, operation, message);
            ServiceError::NotFound(message)
        }
        other => {
            tracing::error!("{} {} failed: {}", entity, operation, other);
            ServiceError::unavailable()
        }
    }
}
