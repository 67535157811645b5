//! Demo records loaded into the in-memory repositories when
//! `MEDREC_SEED_DEMO_DATA` is enabled. Tests reuse them as fixtures.

use crate::error::RepositoryError;
use crate::repositories::{InMemoryEncounterRepository, InMemoryPatientRepository};
use crate::{Encounter, Patient};
use medrec_types::{EmailAddress, EmailError, Money, NonEmptyText, TextError};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid demo text: {0}")]
    Text(#[from] TextError),
    #[error("invalid demo email: {0}")]
    Email(#[from] EmailError),
    #[error("failed to load demo records: {0}")]
    Repository(#[from] RepositoryError),
}

fn patient(id: i64, email_address: &str) -> Result<Patient, SeedError> {
    Ok(Patient {
        id: Some(id),
        first_name: NonEmptyText::new("John")?,
        last_name: NonEmptyText::new("Smith")?,
        ssn: "123-12-1234".into(),
        email: EmailAddress::parse(email_address)?,
        age: 29,
        height: 80,
        weight: 150,
        insurance: "Self-Insured".into(),
        gender: "Male".into(),
        street: "1 Main St".into(),
        city: "New York".into(),
        state: "NY".into(),
        zip_code: "29445".into(),
    })
}

fn encounter(id: i64, patient_id: i64) -> Encounter {
    Encounter {
        id: Some(id),
        patient_id,
        notes: "new note".into(),
        visit_code: "N3W 3C3".into(),
        provider: "new provider".into(),
        billing_code: "123.456.789-00".into(),
        icd10: "Z99".into(),
        total_cost: Money::from_cents(15030),
        copay: Money::from_cents(1010),
        chief_complaint: "Pain".into(),
        pulse: 110,
        systolic: 60,
        diastolic: 90,
        date: "2020-03-15".into(),
    }
}

/// Two patients with ids 1 and 2 and distinct emails.
///
/// # Errors
/// Returns [`SeedError`] if a demo field fails validation.
pub fn demo_patients() -> Result<Vec<Patient>, SeedError> {
    Ok(vec![
        patient(1, "email1@mail.com")?,
        patient(2, "email2@mail.com")?,
    ])
}

/// Two encounters with ids 1 and 2, one per demo patient.
pub fn demo_encounters() -> Vec<Encounter> {
    vec![encounter(1, 1), encounter(2, 2)]
}

/// Builds the in-memory repositories used by the binaries, optionally
/// pre-populated with the demo records.
///
/// # Errors
/// Returns [`SeedError`] if the demo records cannot be built or stored.
pub fn in_memory_repositories(
    with_demo_data: bool,
) -> Result<(InMemoryPatientRepository, InMemoryEncounterRepository), SeedError> {
    if !with_demo_data {
        return Ok((
            InMemoryPatientRepository::new(),
            InMemoryEncounterRepository::new(),
        ));
    }

    tracing::info!("++ Seeding demo patients and encounters");
    Ok((
        InMemoryPatientRepository::with_records(demo_patients()?)?,
        InMemoryEncounterRepository::with_records(demo_encounters())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{EncounterRepository, PatientRepository};

    #[test]
    fn demo_patients_have_distinct_emails() {
        let patients = demo_patients().unwrap();
        assert_eq!(patients.len(), 2);
        assert_ne!(patients[0].email, patients[1].email);
    }

    #[tokio::test]
    async fn repositories_are_empty_unless_demo_data_requested() {
        let (patients, encounters) = in_memory_repositories(false).unwrap();
        assert!(patients.list_all().await.unwrap().is_empty());
        assert!(encounters.list_all().await.unwrap().is_empty());

        let (patients, encounters) = in_memory_repositories(true).unwrap();
        assert_eq!(patients.list_all().await.unwrap().len(), 2);
        assert_eq!(encounters.list_all().await.unwrap().len(), 2);
    }
}
