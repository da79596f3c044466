use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::database::models::guide::{Guide, GuidePatch, NewGuide};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::guides;
use crate::router::AppState;

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Guide>>, ApiError> {
    Ok(Json(guides::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_guide): Path<i64>,
) -> Result<Json<Guide>, ApiError> {
    let guide = guides::by_id(&state.pool, id_guide)
        .await?
        .ok_or_else(|| ApiError::not_found("This guide does not exist"))?;
    Ok(Json(guide))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_guide): Json<NewGuide>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if new_guide.title.is_empty() || new_guide.content.is_empty() {
        return Err(ApiError::bad_request("title and content must not be empty"));
    }
    let id = guides::insert(&state.pool, &new_guide).await?;
    super::created(id, &new_guide)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_guide): Path<i64>,
    Json(patch): Json<GuidePatch>,
) -> Result<Json<Guide>, ApiError> {
    match guides::update(&state.pool, id_guide, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This guide does not exist")),
        _ => {
            let guide = guides::by_id(&state.pool, id_guide)
                .await?
                .ok_or_else(|| ApiError::not_found("This guide does not exist"))?;
            Ok(Json(guide))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_guide): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match guides::delete(&state.pool, id_guide).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This guide does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
