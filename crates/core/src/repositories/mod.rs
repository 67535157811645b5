//! Storage collaborators.
//!
//! The services only ever talk to the traits in this module. Lookups return
//! `RepositoryResult<Option<T>>` so "no such record" (`Ok(None)`) can never be
//! confused with a failed call (`Err(_)`).

pub mod encounter;
pub mod memory;
pub mod patient;

pub use encounter::EncounterRepository;
pub use memory::{InMemoryEncounterRepository, InMemoryPatientRepository};
pub use patient::PatientRepository;

#[cfg(test)]
pub use encounter::MockEncounterRepository;
#[cfg(test)]
pub use patient::MockPatientRepository;
