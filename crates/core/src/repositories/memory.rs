//! In-process repositories backed by ordered maps.
//!
//! These stand in for the relational store when the service runs without a
//! database, and in router tests. Ids are assigned from a per-table counter and
//! never reused. There is no email constraint at this level.

use crate::constants::FIRST_RECORD_ID;
use crate::error::{RepositoryError, RepositoryResult};
use crate::repositories::{EncounterRepository, PatientRepository};
use crate::{Encounter, Patient, Record};
use async_trait::async_trait;
use medrec_types::EmailAddress;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Rows<T> {
    by_id: BTreeMap<i64, T>,
    next_id: i64,
}

/// A single table guarded by a lock. Guards are never held across an `.await`.
#[derive(Debug)]
struct Table<T> {
    name: &'static str,
    rows: RwLock<Rows<T>>,
}

impl<T: Record + Clone> Table<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: FIRST_RECORD_ID,
            }),
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Rows<T>>> {
        self.rows
            .read()
            .map_err(|_| RepositoryError::Unavailable(format!("{} table lock poisoned", self.name)))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Rows<T>>> {
        self.rows
            .write()
            .map_err(|_| RepositoryError::Unavailable(format!("{} table lock poisoned", self.name)))
    }

    fn all(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.read()?.by_id.values().cloned().collect())
    }

    fn get(&self, id: i64) -> RepositoryResult<Option<T>> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> RepositoryResult<Option<T>> {
        Ok(self.read()?.by_id.values().find(|r| pred(*r)).cloned())
    }

    fn insert(&self, mut record: T) -> RepositoryResult<T> {
        let mut rows = self.write()?;
        let id = rows.next_id;
        rows.next_id = self.successor(id)?;
        record.set_id(id);
        rows.by_id.insert(id, record.clone());
        Ok(record)
    }

    /// Keeps an explicit id when present. Used for seeding.
    fn insert_preserving_id(&self, record: T) -> RepositoryResult<T> {
        let Some(id) = record.id() else {
            return self.insert(record);
        };
        let after = self.successor(id)?;
        let mut rows = self.write()?;
        rows.next_id = rows.next_id.max(after);
        rows.by_id.insert(id, record.clone());
        Ok(record)
    }

    fn replace(&self, record: T) -> RepositoryResult<T> {
        let id = self.require_id(&record)?;
        let mut rows = self.write()?;
        match rows.by_id.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(self.missing(id)),
        }
    }

    fn remove(&self, record: &T) -> RepositoryResult<()> {
        let id = self.require_id(record)?;
        let mut rows = self.write()?;
        rows.by_id
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| self.missing(id))
    }

    fn require_id(&self, record: &T) -> RepositoryResult<i64> {
        record.id().ok_or_else(|| {
            RepositoryError::NotFound(format!("{} record has no id", self.name))
        })
    }

    fn successor(&self, id: i64) -> RepositoryResult<i64> {
        id.checked_add(1).ok_or_else(|| {
            RepositoryError::Unavailable(format!("{} id space exhausted after {}", self.name, id))
        })
    }

    fn missing(&self, id: i64) -> RepositoryError {
        RepositoryError::NotFound(format!("{} with id: {} not found.", self.name, id))
    }
}

#[derive(Debug)]
pub struct InMemoryPatientRepository {
    table: Table<Patient>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("Patient"),
        }
    }

    /// Builds a repository pre-populated with `patients`, keeping any ids they carry.
    pub fn with_records(patients: impl IntoIterator<Item = Patient>) -> RepositoryResult<Self> {
        let repo = Self::new();
        for patient in patients {
            repo.table.insert_preserving_id(patient)?;
        }
        Ok(repo)
    }
}

impl Default for InMemoryPatientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<Patient>> {
        self.table.all()
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Patient>> {
        self.table.get(id)
    }

    async fn get_by_email(&self, email: &EmailAddress) -> RepositoryResult<Option<Patient>> {
        self.table.find(|p| &p.email == email)
    }

    async fn create(&self, patient: Patient) -> RepositoryResult<Patient> {
        self.table.insert(patient)
    }

    async fn update(&self, patient: Patient) -> RepositoryResult<Patient> {
        self.table.replace(patient)
    }

    async fn delete(&self, patient: Patient) -> RepositoryResult<()> {
        self.table.remove(&patient)
    }
}

#[derive(Debug)]
pub struct InMemoryEncounterRepository {
    table: Table<Encounter>,
}

impl InMemoryEncounterRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("Encounter"),
        }
    }

    pub fn with_records(
        encounters: impl IntoIterator<Item = Encounter>,
    ) -> RepositoryResult<Self> {
        let repo = Self::new();
        for encounter in encounters {
            repo.table.insert_preserving_id(encounter)?;
        }
        Ok(repo)
    }
}

impl Default for InMemoryEncounterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EncounterRepository for InMemoryEncounterRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<Encounter>> {
        self.table.all()
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Encounter>> {
        self.table.get(id)
    }

    async fn create(&self, encounter: Encounter) -> RepositoryResult<Encounter> {
        self.table.insert(encounter)
    }

    async fn update(&self, encounter: Encounter) -> RepositoryResult<Encounter> {
        self.table.replace(encounter)
    }
}
