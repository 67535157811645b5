use crate::error::RepositoryResult;
use crate::Encounter;
use async_trait::async_trait;

/// Storage access for encounter records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncounterRepository: Send + Sync {
    async fn list_all(&self) -> RepositoryResult<Vec<Encounter>>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Encounter>>;

    async fn create(&self, encounter: Encounter) -> RepositoryResult<Encounter>;

    async fn update(&self, encounter: Encounter) -> RepositoryResult<Encounter>;
}
