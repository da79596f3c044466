use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::database::models::faq::{Faq, FaqPatch, NewFaq};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::faqs;
use crate::router::AppState;

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Faq>>, ApiError> {
    Ok(Json(faqs::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_faq): Path<i64>,
) -> Result<Json<Faq>, ApiError> {
    let faq = faqs::by_id(&state.pool, id_faq)
        .await?
        .ok_or_else(|| ApiError::not_found("This FAQ entry does not exist"))?;
    Ok(Json(faq))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_faq): Json<NewFaq>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if new_faq.question.is_empty() || new_faq.answer.is_empty() {
        return Err(ApiError::bad_request("question and answer must not be empty"));
    }
    let id = faqs::insert(&state.pool, &new_faq).await?;
    super::created(id, &new_faq)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_faq): Path<i64>,
    Json(patch): Json<FaqPatch>,
) -> Result<Json<Faq>, ApiError> {
    match faqs::update(&state.pool, id_faq, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This FAQ entry does not exist")),
        _ => {
            let faq = faqs::by_id(&state.pool, id_faq)
                .await?
                .ok_or_else(|| ApiError::not_found("This FAQ entry does not exist"))?;
            Ok(Json(faq))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_faq): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match faqs::delete(&state.pool, id_faq).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This FAQ entry does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
