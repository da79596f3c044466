use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::database::models::comment::Comment;
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::comments;
use crate::router::AppState;

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(comments::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_comment): Path<i64>,
) -> Result<Json<Comment>, ApiError> {
    let comment = comments::by_id(&state.pool, id_comment)
        .await?
        .ok_or_else(|| ApiError::not_found("This comment does not exist"))?;
    Ok(Json(comment))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_comment): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match comments::delete(&state.pool, id_comment).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This comment does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
