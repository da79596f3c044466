use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::category::{Category, CategoryPatch, NewCategory};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

pub async fn all(pool: &SqlitePool) -> Result<Vec<Category>, DatabaseError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
        .fetch_all(pool)
        .await?;
    Ok(categories)
}

pub async fn by_id(pool: &SqlitePool, id_category: i64) -> Result<Option<Category>, DatabaseError> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
        .bind(id_category)
        .fetch_optional(pool)
        .await?;
    Ok(category)
}

pub async fn by_article(pool: &SqlitePool, id_article: i64) -> Result<Vec<Category>, DatabaseError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT c.id, c.name FROM categories c \
         INNER JOIN articles_categories ac ON c.id = ac.id_category WHERE ac.id_article = ?",
    )
    .bind(id_article)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn by_package(pool: &SqlitePool, id_package: i64) -> Result<Vec<Category>, DatabaseError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT c.id, c.name FROM categories c \
         INNER JOIN packages_categories pc ON c.id = pc.id_category WHERE pc.id_package = ?",
    )
    .bind(id_package)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn insert(pool: &SqlitePool, category: &NewCategory) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
        .bind(&category.name)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_category: i64,
    patch: &CategoryPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("categories")
        .set("name", &patch.name)
        .apply(pool, "id", id_category)
        .await
}

pub async fn delete<'e, E>(executor: E, id_category: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id_category)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
