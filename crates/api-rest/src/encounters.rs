//! `/encounters` handlers. Encounters cannot be deleted through the API.

use crate::extract::{ApiJson, ApiPath};
use crate::{ApiError, AppState};
use api_shared::ErrorRes;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use medrec_core::Encounter;

#[utoipa::path(
    get,
    path = "/encounters",
    responses(
        (status = 200, description = "All encounters", body = [Encounter]),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_encounters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Encounter>>, ApiError> {
    Ok(Json(state.encounter_service.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/encounters/{id}",
    params(("id" = i64, Path, description = "Encounter id")),
    responses(
        (status = 200, description = "Encounter found", body = Encounter),
        (status = 404, description = "No encounter with this id", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_encounter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Encounter>, ApiError> {
    Ok(Json(state.encounter_service.get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/encounters",
    request_body = Encounter,
    responses(
        (status = 201, description = "Encounter created", body = Encounter),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn create_encounter(
    State(state): State<AppState>,
    ApiJson(encounter): ApiJson<Encounter>,
) -> Result<(StatusCode, Json<Encounter>), ApiError> {
    let created = state.encounter_service.create(encounter).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/encounters/{id}",
    params(("id" = i64, Path, description = "Encounter id")),
    request_body = Encounter,
    responses(
        (status = 200, description = "Encounter updated", body = Encounter),
        (status = 404, description = "No encounter with this id", body = ErrorRes),
        (status = 503, description = "Database unavailable", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn update_encounter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(encounter): ApiJson<Encounter>,
) -> Result<Json<Encounter>, ApiError> {
    Ok(Json(state.encounter_service.update(id, encounter).await?))
}
