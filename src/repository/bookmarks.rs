use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::bookmark::Bookmark;
use crate::database::MutationOutcome;

pub async fn all_by_user(pool: &SqlitePool, id_user: i64) -> Result<Vec<Bookmark>, DatabaseError> {
    let bookmarks = sqlx::query_as::<_, Bookmark>(
        "SELECT id, id_user, id_article FROM bookmarks WHERE id_user = ?",
    )
    .bind(id_user)
    .fetch_all(pool)
    .await?;
    Ok(bookmarks)
}

pub async fn by_user_and_article(
    pool: &SqlitePool,
    id_user: i64,
    id_article: i64,
) -> Result<Option<Bookmark>, DatabaseError> {
    let bookmark = sqlx::query_as::<_, Bookmark>(
        "SELECT id, id_user, id_article FROM bookmarks WHERE id_user = ? AND id_article = ?",
    )
    .bind(id_user)
    .bind(id_article)
    .fetch_optional(pool)
    .await?;
    Ok(bookmark)
}

pub async fn insert(pool: &SqlitePool, id_user: i64, id_article: i64) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO bookmarks (id_user, id_article) VALUES (?, ?)")
        .bind(id_user)
        .bind(id_article)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn delete(
    pool: &SqlitePool,
    id_user: i64,
    id_article: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id_user = ? AND id_article = ?")
        .bind(id_user)
        .bind(id_article)
        .execute(pool)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}

pub async fn delete_all_by_user<'e, E>(
    executor: E,
    id_user: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM bookmarks WHERE id_user = ?")
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
    let result = sqlx::query("DELETE FROM bookmarks WHERE id_article = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}
