use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::comment::{Comment, CommentPatch, NewComment};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

const COLUMNS: &str = "id, id_user, id_article, content, comment_date";

pub async fn all(pool: &SqlitePool) -> Result<Vec<Comment>, DatabaseError> {
    let comments = sqlx::query_as::<_, Comment>(&format!("SELECT {} FROM comments", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(comments)
}

pub async fn by_id(pool: &SqlitePool, id_comment: i64) -> Result<Option<Comment>, DatabaseError> {
    let comment =
        sqlx::query_as::<_, Comment>(&format!("SELECT {} FROM comments WHERE id = ?", COLUMNS))
            .bind(id_comment)
            .fetch_optional(pool)
            .await?;
    Ok(comment)
}

pub async fn by_article(pool: &SqlitePool, id_article: i64) -> Result<Vec<Comment>, DatabaseError> {
    let comments = sqlx::query_as::<_, Comment>(&format!(
        "SELECT {} FROM comments WHERE id_article = ?",
        COLUMNS
    ))
    .bind(id_article)
    .fetch_all(pool)
    .await?;
    Ok(comments)
}

pub async fn insert(
    pool: &SqlitePool,
    id_user: i64,
    comment: &NewComment,
) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        "INSERT INTO comments (id_user, id_article, content, comment_date) \
         VALUES (?, ?, ?, datetime('now'))",
    )
    .bind(id_user)
    .bind(comment.id_article)
    .bind(&comment.content)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_comment: i64,
    patch: &CommentPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("comments")
        .set("content", &patch.content)
        .apply(pool, "id", id_comment)
        .await
}

pub async fn delete<'e, E>(executor: E, id_comment: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id_comment)
        .execute(executor)
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
    let result = sqlx::query("DELETE FROM comments WHERE id_user = ?")
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
    let result = sqlx::query("DELETE FROM comments WHERE id_article = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}
