use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::faq::{Faq, FaqPatch, NewFaq};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

pub async fn all(pool: &SqlitePool) -> Result<Vec<Faq>, DatabaseError> {
    let faqs = sqlx::query_as::<_, Faq>("SELECT id, question, answer FROM faqs")
        .fetch_all(pool)
        .await?;
    Ok(faqs)
}

pub async fn by_id(pool: &SqlitePool, id_faq: i64) -> Result<Option<Faq>, DatabaseError> {
    let faq = sqlx::query_as::<_, Faq>("SELECT id, question, answer FROM faqs WHERE id = ?")
        .bind(id_faq)
        .fetch_optional(pool)
        .await?;
    Ok(faq)
}

pub async fn insert(pool: &SqlitePool, faq: &NewFaq) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO faqs (question, answer) VALUES (?, ?)")
        .bind(&faq.question)
        .bind(&faq.answer)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_faq: i64,
    patch: &FaqPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("faqs")
        .set("question", &patch.question)
        .set("answer", &patch.answer)
        .apply(pool, "id", id_faq)
        .await
}

pub async fn delete<'e, E>(executor: E, id_faq: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM faqs WHERE id = ?")
        .bind(id_faq)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
