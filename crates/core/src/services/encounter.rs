//! Encounter service.
//!
//! Same translation rules as [`PatientService`](crate::PatientService), with no
//! uniqueness rule and no delete.

use crate::constants::ENCOUNTER_ENTITY;
use crate::error::ServiceResult;
use crate::repositories::EncounterRepository;
use crate::services::{require_found, storage_failed, write_failed};
use crate::Encounter;
use std::sync::Arc;

#[derive(Clone)]
pub struct EncounterService {
    repository: Arc<dyn EncounterRepository>,
}

impl EncounterService {
    pub fn new(repository: Arc<dyn EncounterRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Encounter>> {
        self.repository
            .list_all()
            .await
            .map_err(|e| storage_failed(ENCOUNTER_ENTITY, "list", e))
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Encounter> {
        let outcome = self.repository.get_by_id(id).await;
        require_found(outcome, ENCOUNTER_ENTITY, id)
    }

    /// Persists `encounter` as given. The referenced patient is not checked.
    pub async fn create(&self, encounter: Encounter) -> ServiceResult<Encounter> {
        let created = self
            .repository
            .create(encounter)
            .await
            .map_err(|e| storage_failed(ENCOUNTER_ENTITY, "create", e))?;

        tracing::info!(
            "created encounter {:?} for patient {}",
            created.id,
            created.patient_id
        );
        Ok(created)
    }

    /// Replaces every mutable field of encounter `id` after confirming it exists.
    pub async fn update(&self, id: i64, mut encounter: Encounter) -> ServiceResult<Encounter> {
        self.get_by_id(id).await?;

        encounter.id = Some(id);
        let updated = self
            .repository
            .update(encounter)
            .await
            .map_err(|e| write_failed(ENCOUNTER_ENTITY, "update", e))?;

        tracing::info!("updated encounter {}", id);
        Ok(updated)
    }
}
