//! Admin CRUD over the three join tables. These endpoints operate on the
//! links directly; the gated variants (bookmark, follow, package link) live
//! on the owning resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::database::models::association::{
    ArticleCategory, ArticleCategoryPatch, ArticlePackage, ArticlePackagePatch, NewArticleCategory,
    NewArticlePackage, NewPackageCategory, PackageCategory, PackageCategoryPatch,
};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::gate;
use crate::repository::associations;
use crate::router::AppState;

// articles_categories

pub async fn article_categories_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleCategory>>, ApiError> {
    Ok(Json(associations::article_categories_all(&state.pool).await?))
}

pub async fn article_category_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleCategory>, ApiError> {
    let link = associations::article_category_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
    Ok(Json(link))
}

pub async fn article_category_add(
    State(state): State<AppState>,
    Json(link): Json<NewArticleCategory>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::article_exists(&state.pool, link.id_article).await?;
    gate::category_exists(&state.pool, link.id_category).await?;

    let id = associations::article_category_insert(&state.pool, &link).await?;
    super::created(id, &link)
}

pub async fn article_category_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ArticleCategoryPatch>,
) -> Result<Json<ArticleCategory>, ApiError> {
    match associations::article_category_update(&state.pool, id, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => {
            let link = associations::article_category_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
            Ok(Json(link))
        }
    }
}

pub async fn article_category_remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match associations::article_category_delete(&state.pool, id).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

// articles_packages

pub async fn article_packages_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticlePackage>>, ApiError> {
    Ok(Json(associations::article_packages_all(&state.pool).await?))
}

pub async fn article_package_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticlePackage>, ApiError> {
    let link = associations::article_package_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
    Ok(Json(link))
}

pub async fn article_package_add(
    State(state): State<AppState>,
    Json(link): Json<NewArticlePackage>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::article_exists(&state.pool, link.id_article).await?;
    gate::package_exists(&state.pool, link.id_package).await?;
    gate::article_not_in_package(&state.pool, link.id_article, link.id_package).await?;

    let id = associations::article_package_insert(&state.pool, &link).await?;
    super::created(id, &link)
}

pub async fn article_package_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ArticlePackagePatch>,
) -> Result<Json<ArticlePackage>, ApiError> {
    match associations::article_package_update(&state.pool, id, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => {
            let link = associations::article_package_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
            Ok(Json(link))
        }
    }
}

pub async fn article_package_remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match associations::article_package_delete(&state.pool, id).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

// packages_categories

pub async fn package_categories_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageCategory>>, ApiError> {
    Ok(Json(associations::package_categories_all(&state.pool).await?))
}

pub async fn package_category_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PackageCategory>, ApiError> {
    let link = associations::package_category_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
    Ok(Json(link))
}

pub async fn package_category_add(
    State(state): State<AppState>,
    Json(link): Json<NewPackageCategory>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::package_exists(&state.pool, link.id_package).await?;
    gate::category_exists(&state.pool, link.id_category).await?;

    let id = associations::package_category_insert(&state.pool, &link).await?;
    super::created(id, &link)
}

pub async fn package_category_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PackageCategoryPatch>,
) -> Result<Json<PackageCategory>, ApiError> {
    match associations::package_category_update(&state.pool, id, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => {
            let link = associations::package_category_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| ApiError::not_found("This link does not exist"))?;
            Ok(Json(link))
        }
    }
}

pub async fn package_category_remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match associations::package_category_delete(&state.pool, id).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This link does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
