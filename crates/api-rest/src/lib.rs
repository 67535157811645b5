//! # API REST
//!
//! REST API implementation for MedRec.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Mapping service errors and rejected requests onto status codes
//!
//! Uses `api-shared` for common types and `medrec-core` for the services.

#![warn(rust_2018_idioms)]

pub mod encounters;
pub mod error;
pub mod extract;
pub mod patients;

use api_shared::{ErrorRes, HealthRes, HealthService};
use axum::{extract::State, response::Json, routing::get, Router};
use medrec_core::{
    Encounter, EncounterRepository, EncounterService, Patient, PatientRepository, PatientService,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Holds one service per record type. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
    pub encounter_service: EncounterService,
}

impl AppState {
    /// Wires the services onto the given repositories.
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        encounters: Arc<dyn EncounterRepository>,
    ) -> Self {
        Self {
            patient_service: PatientService::new(patients),
            encounter_service: EncounterService::new(encounters),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        patients::list_patients,
        patients::get_patient,
        patients::create_patient,
        patients::update_patient,
        patients::delete_patient,
        encounters::list_encounters,
        encounters::get_encounter,
        encounters::create_encounter,
        encounters::update_encounter,
    ),
    components(schemas(HealthRes, ErrorRes, Patient, Encounter))
)]
pub struct ApiDoc;

/// Builds the full REST router, including Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/patients/:id",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/encounters",
            get(encounters::list_encounters).post(encounters::create_encounter),
        )
        .route(
            "/encounters/:id",
            get(encounters::get_encounter).put(encounters::update_encounter),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}
