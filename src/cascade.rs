//! Ordered multi-table deletions. The store declares no foreign keys, so
//! dependents must be removed before their parent. Every cascade runs inside
//! a single transaction: either the parent and all its dependents are gone,
//! or nothing is.

use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::MutationOutcome;
use crate::repository::{articles, associations, bookmarks, comments, completed_articles, followed_packages, packages, users};

/// Delete a user and everything referencing it, in order: bookmarks,
/// completed articles, followed packages, comments, then the user row.
/// The terminal delete must affect exactly one row; otherwise the whole
/// transaction rolls back and the outcome is `NoMatch`.
pub async fn delete_user(pool: &SqlitePool, id_user: i64) -> Result<MutationOutcome, DatabaseError> {
    let mut tx = pool.begin().await?;

    bookmarks::delete_all_by_user(&mut *tx, id_user).await?;
    completed_articles::delete_all_by_user(&mut *tx, id_user).await?;
    followed_packages::delete_all_by_user(&mut *tx, id_user).await?;
    comments::delete_all_by_user(&mut *tx, id_user).await?;
    let outcome = users::delete(&mut *tx, id_user).await?;

    if !outcome.succeeded() {
        tx.rollback().await?;
        return Ok(outcome);
    }

    tx.commit().await?;
    Ok(outcome)
}

/// Delete an article and its dependents: bookmarks, completed records,
/// comments, then both association tables, then the article row.
pub async fn delete_article(
    pool: &SqlitePool,
    id_article: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let mut tx = pool.begin().await?;

    bookmarks::delete_all_by_article(&mut *tx, id_article).await?;
    completed_articles::delete_all_by_article(&mut *tx, id_article).await?;
    comments::delete_all_by_article(&mut *tx, id_article).await?;
    associations::delete_categories_by_article(&mut *tx, id_article).await?;
    associations::delete_packages_by_article(&mut *tx, id_article).await?;
    let outcome = articles::delete(&mut *tx, id_article).await?;

    if !outcome.succeeded() {
        tx.rollback().await?;
        return Ok(outcome);
    }

    tx.commit().await?;
    Ok(outcome)
}

/// Delete a package and its dependents: subscriptions, article links,
/// category links, then the package row.
pub async fn delete_package(
    pool: &SqlitePool,
    id_package: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let mut tx = pool.begin().await?;

    followed_packages::delete_all_by_package(&mut *tx, id_package).await?;
    associations::delete_articles_by_package(&mut *tx, id_package).await?;
    associations::delete_categories_by_package(&mut *tx, id_package).await?;
    let outcome = packages::delete(&mut *tx, id_package).await?;

    if !outcome.succeeded() {
        tx.rollback().await?;
        return Ok(outcome);
    }

    tx.commit().await?;
    Ok(outcome)
}
