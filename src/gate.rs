//! Precondition gates: read-only checks run strictly before a dependent
//! write. Each returns `Result<(), ApiError>` so handlers chain them with
//! `?` and the first failing gate short-circuits the rest, leaving the write
//! path untouched.

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::repository::{articles, associations, categories, comments, followed_packages, packages, users};

pub async fn user_exists(pool: &SqlitePool, id_user: i64) -> Result<(), ApiError> {
    match users::by_id(pool, id_user).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("This user does not exist")),
    }
}

pub async fn article_exists(pool: &SqlitePool, id_article: i64) -> Result<(), ApiError> {
    match articles::by_id(pool, id_article).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("This article does not exist")),
    }
}

pub async fn package_exists(pool: &SqlitePool, id_package: i64) -> Result<(), ApiError> {
    match packages::by_id(pool, id_package).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("This package does not exist")),
    }
}

pub async fn category_exists(pool: &SqlitePool, id_category: i64) -> Result<(), ApiError> {
    match categories::by_id(pool, id_category).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("This category does not exist")),
    }
}

pub async fn comment_exists(pool: &SqlitePool, id_comment: i64) -> Result<(), ApiError> {
    match comments::by_id(pool, id_comment).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("This comment does not exist")),
    }
}

/// Free-uniqueness check on a candidate email.
pub async fn email_is_free(pool: &SqlitePool, email: &str) -> Result<(), ApiError> {
    match users::by_email(pool, email).await? {
        Some(_) => Err(ApiError::conflict("Email is already used")),
        None => Ok(()),
    }
}

/// Non-duplication check for the subscription relation.
pub async fn package_not_followed(
    pool: &SqlitePool,
    id_user: i64,
    id_package: i64,
) -> Result<(), ApiError> {
    match followed_packages::by_user_and_package(pool, id_user, id_package).await? {
        Some(_) => Err(ApiError::conflict("Package is already followed by this user")),
        None => Ok(()),
    }
}

/// The unfollow precondition: the relation must currently exist.
pub async fn package_is_followed(
    pool: &SqlitePool,
    id_user: i64,
    id_package: i64,
) -> Result<(), ApiError> {
    match followed_packages::by_user_and_package(pool, id_user, id_package).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found("Package is not followed by this user")),
    }
}

/// Non-duplication check for the article/package link.
pub async fn article_not_in_package(
    pool: &SqlitePool,
    id_article: i64,
    id_package: i64,
) -> Result<(), ApiError> {
    match associations::article_package_by_pair(pool, id_article, id_package).await? {
        Some(_) => Err(ApiError::conflict("Article is already in this package")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::manager;
    use crate::database::models::package::NewPackage;
    use crate::repository;

    #[tokio::test]
    async fn existence_gate_misses_map_to_not_found() {
        let pool = manager::connect_in_memory().await.unwrap();
        let err = user_exists(&pool, 42).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn non_duplication_gate_reports_conflict() {
        let pool = manager::connect_in_memory().await.unwrap();
        let id_package = repository::packages::insert(
            &pool,
            &NewPackage { name: "Rust basics".into(), description: None },
        )
        .await
        .unwrap();
        repository::followed_packages::insert(&pool, 1, id_package).await.unwrap();

        assert!(package_not_followed(&pool, 1, id_package).await.is_err());
        assert!(package_not_followed(&pool, 2, id_package).await.is_ok());
        assert!(package_is_followed(&pool, 1, id_package).await.is_ok());
        assert_eq!(
            package_is_followed(&pool, 2, id_package).await.unwrap_err().status_code(),
            404
        );
    }
}
