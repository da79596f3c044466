use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::article::{Article, ArticlePatch, NewArticle};
use crate::database::models::category::Category;
use crate::database::models::comment::Comment;
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::{articles, categories, comments};
use crate::router::AppState;
use crate::{cascade, gate, validate};

#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    pub title: Option<String>,
    pub tag: Option<String>,
}

/// GET /api/articles with optional `title` and `tag` filters. Empty strings
/// count as absent; a non-numeric `tag` is a 400.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ArticlesQuery>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let title = query.title.as_deref().filter(|t| !t.is_empty());
    let category = match query.tag.as_deref().filter(|t| !t.is_empty()) {
        Some(tag) => Some(
            tag.parse::<i64>()
                .map_err(|_| ApiError::bad_request("tag must be a numeric category id"))?,
        ),
        None => None,
    };

    Ok(Json(articles::all(&state.pool, title, category).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_article): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = articles::by_id(&state.pool, id_article)
        .await?
        .ok_or_else(|| ApiError::not_found("This article does not exist"))?;
    Ok(Json(article))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_article): Json<NewArticle>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate::new_article(&new_article)?;
    gate::user_exists(&state.pool, new_article.id_user).await?;

    let id = articles::insert(&state.pool, &new_article).await?;
    super::created(id, &new_article)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_article): Path<i64>,
    Json(patch): Json<ArticlePatch>,
) -> Result<Json<Article>, ApiError> {
    validate::article_patch(&patch)?;

    match articles::update(&state.pool, id_article, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This article does not exist")),
        _ => {
            let article = articles::by_id(&state.pool, id_article)
                .await?
                .ok_or_else(|| ApiError::not_found("This article does not exist"))?;
            Ok(Json(article))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_article): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::article_exists(&state.pool, id_article).await?;

    match cascade::delete_article(&state.pool, id_article).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This article does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn comments(
    State(state): State<AppState>,
    Path(id_article): Path<i64>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    gate::article_exists(&state.pool, id_article).await?;
    Ok(Json(comments::by_article(&state.pool, id_article).await?))
}

pub async fn categories(
    State(state): State<AppState>,
    Path(id_article): Path<i64>,
) -> Result<Json<Vec<Category>>, ApiError> {
    gate::article_exists(&state.pool, id_article).await?;
    Ok(Json(categories::by_article(&state.pool, id_article).await?))
}
