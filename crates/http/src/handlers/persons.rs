use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;

use phonebook_core::Person;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::{PersonId, PersonPayload};

pub async fn list_persons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.person_service.list().await?))
}

pub async fn get_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.person_service.get(&id).await?))
}

pub async fn create_person(
    State(state): State<Arc<AppState>>,
    PersonPayload(input): PersonPayload,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.person_service.create(&input).await?))
}

pub async fn update_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
    PersonPayload(input): PersonPayload,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.person_service.update(&id, &input).await?))
}

pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
) -> Result<StatusCode, ApiError> {
    state.person_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
