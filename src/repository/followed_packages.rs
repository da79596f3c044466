use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::followed_package::FollowedPackage;
use crate::database::models::package::Package;
use crate::database::MutationOutcome;

/// Packages a user follows (inner join over the subscription relation).
pub async fn packages_by_user(
    pool: &SqlitePool,
    id_user: i64,
) -> Result<Vec<Package>, DatabaseError> {
    let packages = sqlx::query_as::<_, Package>(
        "SELECT p.id, p.name, p.description FROM packages p \
         INNER JOIN followed_packages fp ON p.id = fp.id_package WHERE fp.id_user = ?",
    )
    .bind(id_user)
    .fetch_all(pool)
    .await?;
    Ok(packages)
}

pub async fn by_user_and_package(
    pool: &SqlitePool,
    id_user: i64,
    id_package: i64,
) -> Result<Option<FollowedPackage>, DatabaseError> {
    let row = sqlx::query_as::<_, FollowedPackage>(
        "SELECT id, id_user, id_package FROM followed_packages \
         WHERE id_user = ? AND id_package = ?",
    )
    .bind(id_user)
    .bind(id_package)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, id_user: i64, id_package: i64) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO followed_packages (id_user, id_package) VALUES (?, ?)")
        .bind(id_user)
        .bind(id_package)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn delete(
    pool: &SqlitePool,
    id_user: i64,
    id_package: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let result = sqlx::query("DELETE FROM followed_packages WHERE id_user = ? AND id_package = ?")
        .bind(id_user)
        .bind(id_package)
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
    let result = sqlx::query("DELETE FROM followed_packages WHERE id_user = ?")
        .bind(id_user)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}

pub async fn delete_all_by_package<'e, E>(
    executor: E,
    id_package: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM followed_packages WHERE id_package = ?")
        .bind(id_package)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}
