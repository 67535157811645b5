use crate::error::RepositoryResult;
use crate::Patient;
use async_trait::async_trait;
use medrec_types::EmailAddress;

/// Storage access for patient records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// All stored patients, in storage order.
    async fn list_all(&self) -> RepositoryResult<Vec<Patient>>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Patient>>;

    async fn get_by_email(&self, email: &EmailAddress) -> RepositoryResult<Option<Patient>>;

    /// Stores a new patient and returns it with its assigned id.
    async fn create(&self, patient: Patient) -> RepositoryResult<Patient>;

    /// Replaces the stored patient carrying the same id.
    async fn update(&self, patient: Patient) -> RepositoryResult<Patient>;

    async fn delete(&self, patient: Patient) -> RepositoryResult<()>;
}
