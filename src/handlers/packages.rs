use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::article::Article;
use crate::database::models::association::NewArticlePackage;
use crate::database::models::category::Category;
use crate::database::models::package::{NewPackage, Package, PackagePatch};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::{articles, associations, categories, packages};
use crate::router::AppState;
use crate::{cascade, gate};

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Package>>, ApiError> {
    Ok(Json(packages::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
) -> Result<Json<Package>, ApiError> {
    let package = packages::by_id(&state.pool, id_package)
        .await?
        .ok_or_else(|| ApiError::not_found("This package does not exist"))?;
    Ok(Json(package))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_package): Json<NewPackage>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if new_package.name.is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    let id = packages::insert(&state.pool, &new_package).await?;
    super::created(id, &new_package)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
    Json(patch): Json<PackagePatch>,
) -> Result<Json<Package>, ApiError> {
    match packages::update(&state.pool, id_package, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This package does not exist")),
        _ => {
            let package = packages::by_id(&state.pool, id_package)
                .await?
                .ok_or_else(|| ApiError::not_found("This package does not exist"))?;
            Ok(Json(package))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::package_exists(&state.pool, id_package).await?;

    match cascade::delete_package(&state.pool, id_package).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This package does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn articles(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
) -> Result<Json<Vec<Article>>, ApiError> {
    gate::package_exists(&state.pool, id_package).await?;
    Ok(Json(articles::by_package(&state.pool, id_package).await?))
}

pub async fn categories(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
) -> Result<Json<Vec<Category>>, ApiError> {
    gate::package_exists(&state.pool, id_package).await?;
    Ok(Json(categories::by_package(&state.pool, id_package).await?))
}

#[derive(Debug, Deserialize)]
pub struct LinkArticle {
    pub id_article: i64,
}

/// POST /api/packages/:id_package/articles — attach an existing article.
pub async fn add_article(
    State(state): State<AppState>,
    Path(id_package): Path<i64>,
    Json(link): Json<LinkArticle>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::package_exists(&state.pool, id_package).await?;
    gate::article_exists(&state.pool, link.id_article).await?;
    gate::article_not_in_package(&state.pool, link.id_article, id_package).await?;

    let new_link = NewArticlePackage { id_article: link.id_article, id_package };
    let id = associations::article_package_insert(&state.pool, &new_link).await?;
    super::created(id, &new_link)
}
