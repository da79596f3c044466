use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::database::models::category::{Category, CategoryPatch, NewCategory};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::categories;
use crate::router::AppState;

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(categories::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_category): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    let category = categories::by_id(&state.pool, id_category)
        .await?
        .ok_or_else(|| ApiError::not_found("This category does not exist"))?;
    Ok(Json(category))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_category): Json<NewCategory>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if new_category.name.is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    let id = categories::insert(&state.pool, &new_category).await?;
    super::created(id, &new_category)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_category): Path<i64>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>, ApiError> {
    match categories::update(&state.pool, id_category, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This category does not exist")),
        _ => {
            let category = categories::by_id(&state.pool, id_category)
                .await?
                .ok_or_else(|| ApiError::not_found("This category does not exist"))?;
            Ok(Json(category))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_category): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match categories::delete(&state.pool, id_category).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This category does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
