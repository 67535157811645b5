//! # API Shared
//!
//! Transport-neutral pieces used by the MedRec APIs.
//!
//! Contains:
//! - Response DTOs (`HealthRes`, `ErrorRes`) with OpenAPI schemas
//! - Shared services like `HealthService`

pub mod health;
pub mod responses;

pub use health::HealthService;
pub use responses::{ErrorRes, HealthRes};
