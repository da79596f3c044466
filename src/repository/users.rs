use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::user::{NewUser, User, UserPatch};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

const COLUMNS: &str = "id, first_name, last_name, phone_number, email, user_picture, password, \
                       id_theme, id_language, is_admin, registration_date";

pub async fn all(pool: &SqlitePool) -> Result<Vec<User>, DatabaseError> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn by_id(pool: &SqlitePool, id_user: i64) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", COLUMNS))
        .bind(id_user)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", COLUMNS))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        "INSERT INTO users (first_name, last_name, phone_number, email, user_picture, password, \
         id_theme, id_language, is_admin, registration_date) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, datetime('now'))",
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.phone_number)
    .bind(&user.email)
    .bind(&user.user_picture)
    .bind(&user.password)
    .bind(user.id_theme)
    .bind(user.id_language)
    .bind(user.is_admin)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_user: i64,
    patch: &UserPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("users")
        .set("first_name", &patch.first_name)
        .set("last_name", &patch.last_name)
        .set("phone_number", &patch.phone_number)
        .set("email", &patch.email)
        .set("user_picture", &patch.user_picture)
        .set("password", &patch.password)
        .set("id_theme", &patch.id_theme)
        .set("id_language", &patch.id_language)
        .set("is_admin", &patch.is_admin)
        .apply(pool, "id", id_user)
        .await
}

pub async fn delete<'e, E>(executor: E, id_user: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id_user)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
