use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::guide::{Guide, GuidePatch, NewGuide};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

pub async fn all(pool: &SqlitePool) -> Result<Vec<Guide>, DatabaseError> {
    let guides = sqlx::query_as::<_, Guide>("SELECT id, title, content FROM guides")
        .fetch_all(pool)
        .await?;
    Ok(guides)
}

pub async fn by_id(pool: &SqlitePool, id_guide: i64) -> Result<Option<Guide>, DatabaseError> {
    let guide = sqlx::query_as::<_, Guide>("SELECT id, title, content FROM guides WHERE id = ?")
        .bind(id_guide)
        .fetch_optional(pool)
        .await?;
    Ok(guide)
}

pub async fn insert(pool: &SqlitePool, guide: &NewGuide) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO guides (title, content) VALUES (?, ?)")
        .bind(&guide.title)
        .bind(&guide.content)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_guide: i64,
    patch: &GuidePatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("guides")
        .set("title", &patch.title)
        .set("content", &patch.content)
        .apply(pool, "id", id_guide)
        .await
}

pub async fn delete<'e, E>(executor: E, id_guide: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM guides WHERE id = ?")
        .bind(id_guide)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
