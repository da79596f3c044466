use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::package::{NewPackage, Package, PackagePatch};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

pub async fn all(pool: &SqlitePool) -> Result<Vec<Package>, DatabaseError> {
    let packages = sqlx::query_as::<_, Package>("SELECT id, name, description FROM packages")
        .fetch_all(pool)
        .await?;
    Ok(packages)
}

pub async fn by_id(pool: &SqlitePool, id_package: i64) -> Result<Option<Package>, DatabaseError> {
    let package =
        sqlx::query_as::<_, Package>("SELECT id, name, description FROM packages WHERE id = ?")
            .bind(id_package)
            .fetch_optional(pool)
            .await?;
    Ok(package)
}

/// Packages the user does not follow yet (discovery listing).
pub async fn all_excluding_user(
    pool: &SqlitePool,
    id_user: i64,
) -> Result<Vec<Package>, DatabaseError> {
    let packages = sqlx::query_as::<_, Package>(
        "SELECT id, name, description FROM packages \
         WHERE id NOT IN (SELECT id_package FROM followed_packages WHERE id_user = ?)",
    )
    .bind(id_user)
    .fetch_all(pool)
    .await?;
    Ok(packages)
}

pub async fn insert(pool: &SqlitePool, package: &NewPackage) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO packages (name, description) VALUES (?, ?)")
        .bind(&package.name)
        .bind(&package.description)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_package: i64,
    patch: &PackagePatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("packages")
        .set("name", &patch.name)
        .set("description", &patch.description)
        .apply(pool, "id", id_package)
        .await
}

pub async fn delete<'e, E>(executor: E, id_package: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM packages WHERE id = ?")
        .bind(id_package)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
