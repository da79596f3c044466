use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::completed_article::CompletedArticle;
use crate::database::MutationOutcome;

pub async fn by_user(
    pool: &SqlitePool,
    id_user: i64,
) -> Result<Vec<CompletedArticle>, DatabaseError> {
    let rows = sqlx::query_as::<_, CompletedArticle>(
        "SELECT id, id_user, id_article, rating FROM completed_articles WHERE id_user = ?",
    )
    .bind(id_user)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn by_user_and_article(
    pool: &SqlitePool,
    id_user: i64,
    id_article: i64,
) -> Result<Option<CompletedArticle>, DatabaseError> {
    let row = sqlx::query_as::<_, CompletedArticle>(
        "SELECT id, id_user, id_article, rating FROM completed_articles \
         WHERE id_user = ? AND id_article = ?",
    )
    .bind(id_user)
    .bind(id_article)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Completions restricted to articles belonging to one package.
pub async fn by_user_and_package(
    pool: &SqlitePool,
    id_user: i64,
    id_package: i64,
) -> Result<Vec<CompletedArticle>, DatabaseError> {
    let rows = sqlx::query_as::<_, CompletedArticle>(
        "SELECT ca.id, ca.id_user, ca.id_article, ca.rating FROM completed_articles ca \
         INNER JOIN articles_packages ap ON ap.id_article = ca.id_article \
         WHERE ca.id_user = ? AND ap.id_package = ?",
    )
    .bind(id_user)
    .bind(id_package)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(
    pool: &SqlitePool,
    id_user: i64,
    id_article: i64,
    rating: Option<i64>,
) -> Result<i64, DatabaseError> {
    let result =
        sqlx::query("INSERT INTO completed_articles (id_user, id_article, rating) VALUES (?, ?, ?)")
            .bind(id_user)
            .bind(id_article)
            .bind(rating)
            .execute(pool)
            .await?;
    Ok(result.last_insert_rowid())
}

pub async fn delete_all_by_user<'e, E>(
    executor: E,
    id_user: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM completed_articles WHERE id_user = ?")
        .bind(id_user)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}

pub async fn delete_all_by_article<'e, E>(
    executor: E,
    id_article: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM completed_articles WHERE id_article = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}
