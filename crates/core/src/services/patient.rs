//! Patient service.

use crate::constants::PATIENT_ENTITY;
use crate::error::{ServiceError, ServiceResult};
use crate::repositories::PatientRepository;
use crate::services::{require_found, storage_failed, write_failed};
use crate::Patient;
use medrec_types::EmailAddress;
use std::sync::Arc;

/// CRUD orchestration for patients, including the duplicate-email rule.
#[derive(Clone)]
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

impl PatientService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    /// Lists every stored patient.
    ///
    /// # Errors
    ///
    /// `ServiceUnavailable` if the repository fails.
    pub async fn list_all(&self) -> ServiceResult<Vec<Patient>> {
        self.repository
            .list_all()
            .await
            .map_err(|e| storage_failed(PATIENT_ENTITY, "list", e))
    }

    /// Fetches one patient.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repository has no patient with `id`
    /// - `ServiceUnavailable` if the lookup itself fails
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Patient> {
        let outcome = self.repository.get_by_id(id).await;
        require_found(outcome, PATIENT_ENTITY, id)
    }

    /// Stores a new patient and returns what the repository persisted.
    ///
    /// The email check and the insert are two separate repository calls. Two
    /// concurrent creates with the same email can both pass the check.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a stored patient already uses the email
    /// - `ServiceUnavailable` if the email lookup or the insert fails
    pub async fn create(&self, patient: Patient) -> ServiceResult<Patient> {
        self.ensure_email_available(&patient.email, None).await?;

        let created = self
            .repository
            .create(patient)
            .await
            .map_err(|e| storage_failed(PATIENT_ENTITY, "create", e))?;

        tracing::info!("created patient {:?}", created.id);
        Ok(created)
    }

    /// Replaces every mutable field of patient `id`.
    ///
    /// The stored record keeps `id` whatever the body carries. Keeping the
    /// patient's own email is not a conflict.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no patient has `id`, or if the row vanished before the write
    /// - `Conflict` if another patient already uses the email
    /// - `ServiceUnavailable` on any other repository failure
    pub async fn update(&self, id: i64, mut patient: Patient) -> ServiceResult<Patient> {
        self.get_by_id(id).await?;
        self.ensure_email_available(&patient.email, Some(id)).await?;

        patient.id = Some(id);
        let updated = self
            .repository
            .update(patient)
            .await
            .map_err(|e| write_failed(PATIENT_ENTITY, "update", e))?;

        tracing::info!("updated patient {}", id);
        Ok(updated)
    }

    /// Removes patient `id` after confirming it exists.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no patient has `id`, or if the row vanished before the delete
    /// - `ServiceUnavailable` on any other repository failure
    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        let existing = self.get_by_id(id).await?;

        self.repository
            .delete(existing)
            .await
            .map_err(|e| write_failed(PATIENT_ENTITY, "delete", e))?;

        tracing::info!("deleted patient {}", id);
        Ok(())
    }

    async fn ensure_email_available(
        &self,
        email: &EmailAddress,
        updating: Option<i64>,
    ) -> ServiceResult<()> {
        let holder = self
            .repository
            .get_by_email(email)
            .await
            .map_err(|e| storage_failed(PATIENT_ENTITY, "lookup by email", e))?;

        match holder {
            Some(existing) if updating.is_none() || existing.id != updating => {
                tracing::warn!("email already used by patient {:?}", existing.id);
                Err(ServiceError::Conflict(format!(
                    "A patient with email: {} already exists.",
                    email
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use crate::repositories::MockPatientRepository;
    use crate::seed;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn service(repo: MockPatientRepository) -> PatientService {
        PatientService::new(Arc::new(repo))
    }

    fn patient(id: i64) -> Patient {
        seed::demo_patients()
            .unwrap()
            .into_iter()
            .find(|p| p.id == Some(id))
            .unwrap()
    }

    fn new_patient(email: &str) -> Patient {
        let mut p = patient(1);
        p.id = None;
        p.email = EmailAddress::parse(email).unwrap();
        p
    }

    fn db_down() -> RepositoryError {
        RepositoryError::Unavailable("connection refused".into())
    }

    #[tokio::test]
    async fn list_all_returns_all_patients() {
        let patients = seed::demo_patients().unwrap();
        let expected = patients.clone();
        let mut repo = MockPatientRepository::new();
        repo.expect_list_all()
            .times(1)
            .returning(move || Ok(patients.clone()));

        let actual = service(repo).list_all().await.unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn list_all_database_error_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_list_all().returning(|| Err(db_down()));

        let err = service(repo).list_all().await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::ServiceUnavailable(
                "There was a problem connecting to the database.".into()
            )
        );
    }

    #[tokio::test]
    async fn get_by_id_returns_matching_patient() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(patient(1))));

        let actual = service(repo).get_by_id(1).await.unwrap();
        assert_eq!(actual, patient(1));
    }

    #[tokio::test]
    async fn get_by_id_absent_is_not_found_with_id() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().with(eq(2)).returning(|_| Ok(None));

        let err = service(repo).get_by_id(2).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("Patient with id: 2 could not be found.".into())
        );
    }

    #[tokio::test]
    async fn get_by_id_database_error_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Err(db_down()));

        let err = service(repo).get_by_id(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn create_returns_saved_patient() {
        let input = new_patient("email3@mail.com");
        let mut saved = input.clone();
        saved.id = Some(3);
        let returned = saved.clone();

        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_email()
            .with(eq(input.email.clone()))
            .returning(|_| Ok(None));
        repo.expect_create()
            .with(eq(input.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let actual = service(repo).create(input).await.unwrap();
        assert_eq!(actual, saved);
    }

    #[tokio::test]
    async fn create_with_existing_email_is_conflict_and_never_persists() {
        let input = new_patient("email1@mail.com");
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(Some(patient(1))));
        repo.expect_create().never();

        let err = service(repo).create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_email_lookup_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_email().returning(|_| Err(db_down()));
        repo.expect_create().never();

        let err = service(repo)
            .create(new_patient("email5@mail.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn create_persist_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|_| Err(db_down()));

        let err = service(repo)
            .create(new_patient("email@mail.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn update_changes_gender_and_returns_repository_record() {
        let mut updated = patient(1);
        updated.gender = "Female".into();
        let returned = updated.clone();

        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email()
            .returning(|_| Ok(Some(patient(1))));
        repo.expect_update()
            .with(eq(updated.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let actual = service(repo).update(1, updated.clone()).await.unwrap();
        assert_eq!(actual, updated);
        assert_eq!(actual.gender, "Female");
    }

    #[tokio::test]
    async fn update_forces_path_id_onto_record() {
        let mut body = patient(1);
        body.id = Some(99);
        let mut expected = body.clone();
        expected.id = Some(1);

        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_update()
            .with(eq(expected.clone()))
            .returning(|p| Ok(p));

        let actual = service(repo).update(1, body).await.unwrap();
        assert_eq!(actual.id, Some(1));
    }

    #[tokio::test]
    async fn update_missing_patient_is_not_found_before_any_write() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().with(eq(1)).returning(|_| Ok(None));
        repo.expect_get_by_email().never();
        repo.expect_update().never();

        let err = service(repo).update(1, patient(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains('1')));
    }

    #[tokio::test]
    async fn update_lookup_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Err(db_down()));
        repo.expect_update().never();

        let err = service(repo).update(1, patient(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn update_email_lookup_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email().returning(|_| Err(db_down()));
        repo.expect_update().never();

        let err = service(repo).update(1, patient(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn update_to_another_patients_email_is_conflict() {
        let mut body = patient(1);
        body.email = EmailAddress::parse("email2@mail.com").unwrap();

        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email().returning(|_| Ok(Some(patient(2))));
        repo.expect_update().never();

        let err = service(repo).update(1, body).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_persist_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email().returning(|_| Ok(Some(patient(1))));
        repo.expect_update().returning(|_| Err(db_down()));

        let err = service(repo).update(1, patient(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn update_passes_repository_not_found_through() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_update().returning(|_| {
            Err(RepositoryError::NotFound(
                "Patient with id: 1 not found.".into(),
            ))
        });

        let err = service(repo).update(1, patient(1)).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::NotFound("Patient with id: 1 not found.".into())
        );
    }

    #[tokio::test]
    async fn delete_checks_existence_before_deleting() {
        let mut seq = Sequence::new();
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(patient(1))));
        repo.expect_delete()
            .with(eq(patient(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        service(repo).delete_by_id(1).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_patient_is_not_found() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let err = service(repo).delete_by_id(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_lookup_failure_is_unavailable() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Err(db_down()));
        repo.expect_delete().never();

        let err = service(repo).delete_by_id(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn delete_failure_is_unavailable_unless_not_found() {
        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_delete().returning(|_| Err(db_down()));
        let err = service(repo).delete_by_id(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));

        let mut repo = MockPatientRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(patient(1))));
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound("gone".into())));
        let err = service(repo).delete_by_id(1).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("gone".into()));
    }
}
