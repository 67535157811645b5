//! # MedRec Core
//!
//! Core business logic for the MedRec patient and encounter record service.
//!
//! This crate contains:
//! - The [`Patient`] and [`Encounter`] record types
//! - Repository traits describing the storage collaborator, plus in-memory implementations
//! - [`PatientService`] and [`EncounterService`], which translate storage outcomes into
//!   [`ServiceError`] kinds
//! - Startup configuration ([`CoreConfig`])
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest` and `api-shared`.

pub mod config;
pub mod constants;
pub mod encounter;
pub mod error;
pub mod patient;
pub mod repositories;
pub mod seed;
pub mod services;

pub use config::{ConfigError, CoreConfig};
pub use encounter::Encounter;
pub use error::{RepositoryError, RepositoryResult, ServiceError, ServiceResult};
pub use medrec_types::{EmailAddress, Money, NonEmptyText};
pub use patient::Patient;
pub use repositories::{
    EncounterRepository, InMemoryEncounterRepository, InMemoryPatientRepository,
    PatientRepository,
};
pub use services::{EncounterService, PatientService};

/// A persisted record with a server-assigned integer identity.
///
/// `None` means the record has not been stored yet.
pub trait Record {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
}
