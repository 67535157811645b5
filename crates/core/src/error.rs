/// Errors surfaced by [`PatientService`](crate::PatientService) and
/// [`EncounterService`](crate::EncounterService).
///
/// Every repository outcome is classified into exactly one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The requested id has no stored record.
    #[error("{0}")]
    NotFound(String),
    /// The write would break the patient email uniqueness rule.
    #[error("{0}")]
    Conflict(String),
    /// The repository could not be reached or failed for any other reason.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} with id: {id} could not be found."))
    }

    pub fn unavailable() -> Self {
        Self::ServiceUnavailable(crate::constants::DATABASE_UNAVAILABLE_MESSAGE.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Failure raised by a repository implementation.
///
/// Services treat `Unavailable` as a connectivity problem. `NotFound` is only
/// meaningful on writes, where it is passed through to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
