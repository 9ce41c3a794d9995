//! Character CRUD handlers: getAll, get, add, delete.
//!
//! The create body is taken as raw JSON and run through the collected
//! validator before it is ever deserialized into a record, so one response
//! can report every offending field.

use crate::error::AppError;
use crate::model::{Character, CharacterSummary};
use crate::response::{delete_info, DeleteInfo};
use crate::state::AppState;
use crate::validation::validate_create;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// GET /character/getAll — summary projections for every record.
#[utoipa::path(
    get,
    path = "/character/getAll",
    responses((status = 200, description = "All characters", body = [CharacterSummary]))
)]
pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterSummary>>, AppError> {
    Ok(Json(state.store.list_summary().await?))
}

/// GET /character/get/{id} — one full record.
#[utoipa::path(
    get,
    path = "/character/get/{id}",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 404, description = "No character with this id")
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Character>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// POST /character/add — validate and persist a new record.
#[utoipa::path(
    post,
    path = "/character/add",
    request_body = Character,
    responses(
        (status = 201, description = "Created character", body = Character),
        (status = 400, description = "Validation failure or duplicate id")
    )
)]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Character>), AppError> {
    let Value::Object(map) = body else {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    };
    let errors = validate_create(&map);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let character: Character =
        serde_json::from_value(Value::Object(map)).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let stored = state.store.create(character).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /character/delete/{id} — remove one record.
#[utoipa::path(
    delete,
    path = "/character/delete/{id}",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteInfo),
        (status = 404, description = "No character with this id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteInfo>, AppError> {
    state.store.delete(id).await?;
    Ok(Json(delete_info(id)))
}
