//! `/patients` handlers.

use crate::extract::{ApiJson, ApiPath};
use crate::{ApiError, AppState};
use api_shared::ErrorRes;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use medrec_core::Patient;

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients", body = [Patient]),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
/// List all patients.
#[axum::debug_handler]
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state.patient_service.list_all().await?;
    Ok(Json(patients))
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient found", body = Patient),
        (status = 404, description = "No patient with this id", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Patient>, ApiError> {
    let patient = state.patient_service.get_by_id(id).await?;
    Ok(Json(patient))
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = Patient,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 409, description = "Email already in use", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
/// Create a new patient record
///
/// Any `id` in the body is ignored; storage assigns one.
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    ApiJson(patient): ApiJson<Patient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let created = state.patient_service.create(patient).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    request_body = Patient,
    responses(
        (status = 200, description = "Patient updated", body = Patient),
        (status = 404, description = "No patient with this id", body = ErrorRes),
        (status = 409, description = "Email used by another patient", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patient): ApiJson<Patient>,
) -> Result<Json<Patient>, ApiError> {
    let updated = state.patient_service.update(id, patient).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "No patient with this id", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.patient_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
