//! Constants used throughout the MedRec core crate.

/// Message carried by every `ServiceUnavailable` raised from a repository failure.
pub const DATABASE_UNAVAILABLE_MESSAGE: &str = "There was a problem connecting to the database.";

/// Entity label used in patient error messages.
pub const PATIENT_ENTITY: &str = "Patient";

/// Entity label used in encounter error messages.
pub const ENCOUNTER_ENTITY: &str = "Encounter";

/// Default REST listen address when no explicit address is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// First id handed out by the in-memory repositories.
pub const FIRST_RECORD_ID: i64 = 1;
