//! User endpoints, including the per-user sub-resources: bookmarks,
//! completed articles, followed packages, and authored comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::database::models::bookmark::{Bookmark, NewBookmark};
use crate::database::models::comment::{Comment, CommentPatch, NewComment};
use crate::database::models::completed_article::{CompletedArticle, NewCompletedArticle};
use crate::database::models::followed_package::{FollowedPackage, NewFollowedPackage};
use crate::database::models::package::Package;
use crate::database::models::user::{NewUser, User, UserPatch};
use crate::database::MutationOutcome;
use crate::error::ApiError;
use crate::repository::{articles, bookmarks, comments, completed_articles, followed_packages, packages, users};
use crate::router::AppState;
use crate::{cascade, gate, validate};

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(users::all(&state.pool).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = users::by_id(&state.pool, id_user)
        .await?
        .ok_or_else(|| ApiError::not_found("This user does not exist"))?;
    Ok(Json(user))
}

pub async fn add(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate::new_user(&new_user)?;
    gate::email_is_free(&state.pool, &new_user.email).await?;

    let id = users::insert(&state.pool, &new_user).await?;
    super::created(id, &new_user)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    validate::user_patch(&patch)?;

    match users::update(&state.pool, id_user, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This user does not exist")),
        _ => {
            let user = users::by_id(&state.pool, id_user)
                .await?
                .ok_or_else(|| ApiError::not_found("This user does not exist"))?;
            Ok(Json(user))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;

    match cascade::delete_user(&state.pool, id_user).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This user does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

// Bookmarks

pub async fn bookmarks(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    Ok(Json(bookmarks::all_by_user(&state.pool, id_user).await?))
}

pub async fn bookmarked_articles(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<Vec<crate::database::models::article::Article>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    Ok(Json(articles::bookmarked_by_user(&state.pool, id_user).await?))
}

pub async fn bookmark_by_article(
    State(state): State<AppState>,
    Path((id_user, id_article)): Path<(i64, i64)>,
) -> Result<Json<Option<Bookmark>>, ApiError> {
    Ok(Json(
        bookmarks::by_user_and_article(&state.pool, id_user, id_article).await?,
    ))
}

pub async fn add_bookmark(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
    Json(new_bookmark): Json<NewBookmark>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    gate::article_exists(&state.pool, new_bookmark.id_article).await?;

    let id = bookmarks::insert(&state.pool, id_user, new_bookmark.id_article).await?;
    let bookmark = Bookmark { id, id_user, id_article: new_bookmark.id_article };
    super::created(id, &bookmark)
}

pub async fn remove_bookmark(
    State(state): State<AppState>,
    Path((id_user, id_article)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    match bookmarks::delete(&state.pool, id_user, id_article).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This bookmark does not exist")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn remove_all_bookmarks(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    bookmarks::delete_all_by_user(&state.pool, id_user).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Completed articles

pub async fn completed(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<Vec<CompletedArticle>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    Ok(Json(completed_articles::by_user(&state.pool, id_user).await?))
}

pub async fn completed_by_article(
    State(state): State<AppState>,
    Path((id_user, id_article)): Path<(i64, i64)>,
) -> Result<Json<Option<CompletedArticle>>, ApiError> {
    Ok(Json(
        completed_articles::by_user_and_article(&state.pool, id_user, id_article).await?,
    ))
}

pub async fn completed_by_package(
    State(state): State<AppState>,
    Path((id_user, id_package)): Path<(i64, i64)>,
) -> Result<Json<Vec<CompletedArticle>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    gate::package_exists(&state.pool, id_package).await?;
    Ok(Json(
        completed_articles::by_user_and_package(&state.pool, id_user, id_package).await?,
    ))
}

pub async fn add_completed(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
    Json(new_completed): Json<NewCompletedArticle>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate::rating(new_completed.rating)?;
    gate::user_exists(&state.pool, id_user).await?;
    gate::article_exists(&state.pool, new_completed.id_article).await?;

    let id = completed_articles::insert(
        &state.pool,
        id_user,
        new_completed.id_article,
        new_completed.rating,
    )
    .await?;
    let record = CompletedArticle {
        id,
        id_user,
        id_article: new_completed.id_article,
        rating: new_completed.rating,
    };
    super::created(id, &record)
}

pub async fn remove_completed(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    completed_articles::delete_all_by_user(&state.pool, id_user).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Followed packages

pub async fn followed(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<Vec<Package>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    Ok(Json(followed_packages::packages_by_user(&state.pool, id_user).await?))
}

pub async fn followed_by_package(
    State(state): State<AppState>,
    Path((id_user, id_package)): Path<(i64, i64)>,
) -> Result<Json<Option<FollowedPackage>>, ApiError> {
    Ok(Json(
        followed_packages::by_user_and_package(&state.pool, id_user, id_package).await?,
    ))
}

pub async fn follow(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
    Json(new_followed): Json<NewFollowedPackage>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    gate::package_exists(&state.pool, new_followed.id_package).await?;
    gate::package_not_followed(&state.pool, id_user, new_followed.id_package).await?;

    let id = followed_packages::insert(&state.pool, id_user, new_followed.id_package).await?;
    let record = FollowedPackage { id, id_user, id_package: new_followed.id_package };
    super::created(id, &record)
}

pub async fn unfollow(
    State(state): State<AppState>,
    Path((id_user, id_package)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    gate::package_is_followed(&state.pool, id_user, id_package).await?;

    match followed_packages::delete(&state.pool, id_user, id_package).await? {
        MutationOutcome::NoMatch => {
            Err(ApiError::not_found("Package is not followed by this user"))
        }
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn unfollow_all(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<StatusCode, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    followed_packages::delete_all_by_user(&state.pool, id_user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Discovery listing: packages the user does not follow yet.
pub async fn discover_packages(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
) -> Result<Json<Vec<Package>>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    Ok(Json(packages::all_excluding_user(&state.pool, id_user).await?))
}

// Comments authored by a user

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id_user): Path<i64>,
    Json(new_comment): Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    gate::article_exists(&state.pool, new_comment.id_article).await?;

    let id = comments::insert(&state.pool, id_user, &new_comment).await?;
    let comment = comments::by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::internal_server_error("Failed to read back comment"))?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path((id_user, id_comment)): Path<(i64, i64)>,
    Json(patch): Json<CommentPatch>,
) -> Result<Json<Comment>, ApiError> {
    gate::user_exists(&state.pool, id_user).await?;
    gate::comment_exists(&state.pool, id_comment).await?;

    match comments::update(&state.pool, id_comment, &patch).await? {
        MutationOutcome::NoMatch => Err(ApiError::not_found("This comment does not exist")),
        _ => {
            let comment = comments::by_id(&state.pool, id_comment)
                .await?
                .ok_or_else(|| ApiError::not_found("This comment does not exist"))?;
            Ok(Json(comment))
        }
    }
}
