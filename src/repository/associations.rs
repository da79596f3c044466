//! Join-table statements: admin CRUD over the three association tables plus
//! the pair lookups and bulk deletes the gates and cascades are built on.

use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::association::{
    ArticleCategory, ArticleCategoryPatch, ArticlePackage, ArticlePackagePatch, NewArticleCategory,
    NewArticlePackage, NewPackageCategory, PackageCategory, PackageCategoryPatch,
};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

// articles_categories

pub async fn article_categories_all(
    pool: &SqlitePool,
) -> Result<Vec<ArticleCategory>, DatabaseError> {
    let rows = sqlx::query_as::<_, ArticleCategory>(
        "SELECT id, id_article, id_category FROM articles_categories",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn article_category_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<ArticleCategory>, DatabaseError> {
    let row = sqlx::query_as::<_, ArticleCategory>(
        "SELECT id, id_article, id_category FROM articles_categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn article_category_insert(
    pool: &SqlitePool,
    link: &NewArticleCategory,
) -> Result<i64, DatabaseError> {
    let result =
        sqlx::query("INSERT INTO articles_categories (id_article, id_category) VALUES (?, ?)")
            .bind(link.id_article)
            .bind(link.id_category)
            .execute(pool)
            .await?;
    Ok(result.last_insert_rowid())
}

pub async fn article_category_update(
    pool: &SqlitePool,
    id: i64,
    patch: &ArticleCategoryPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("articles_categories")
        .set("id_article", &patch.id_article)
        .set("id_category", &patch.id_category)
        .apply(pool, "id", id)
        .await
}

pub async fn article_category_delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let result = sqlx::query("DELETE FROM articles_categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}

pub async fn delete_categories_by_article<'e, E>(
    executor: E,
    id_article: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM articles_categories WHERE id_article = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}

// articles_packages

pub async fn article_packages_all(pool: &SqlitePool) -> Result<Vec<ArticlePackage>, DatabaseError> {
    let rows = sqlx::query_as::<_, ArticlePackage>(
        "SELECT id, id_article, id_package FROM articles_packages",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn article_package_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<ArticlePackage>, DatabaseError> {
    let row = sqlx::query_as::<_, ArticlePackage>(
        "SELECT id, id_article, id_package FROM articles_packages WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Pair lookup used by the duplicate-link gate.
pub async fn article_package_by_pair(
    pool: &SqlitePool,
    id_article: i64,
    id_package: i64,
) -> Result<Option<ArticlePackage>, DatabaseError> {
    let row = sqlx::query_as::<_, ArticlePackage>(
        "SELECT id, id_article, id_package FROM articles_packages \
         WHERE id_article = ? AND id_package = ?",
    )
    .bind(id_article)
    .bind(id_package)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn article_package_insert(
    pool: &SqlitePool,
    link: &NewArticlePackage,
) -> Result<i64, DatabaseError> {
    let result =
        sqlx::query("INSERT INTO articles_packages (id_article, id_package) VALUES (?, ?)")
            .bind(link.id_article)
            .bind(link.id_package)
            .execute(pool)
            .await?;
    Ok(result.last_insert_rowid())
}

pub async fn article_package_update(
    pool: &SqlitePool,
    id: i64,
    patch: &ArticlePackagePatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("articles_packages")
        .set("id_article", &patch.id_article)
        .set("id_package", &patch.id_package)
        .apply(pool, "id", id)
        .await
}

pub async fn article_package_delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let result = sqlx::query("DELETE FROM articles_packages WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}

pub async fn delete_packages_by_article<'e, E>(
    executor: E,
    id_article: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM articles_packages WHERE id_article = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}

pub async fn delete_articles_by_package<'e, E>(
    executor: E,
    id_package: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM articles_packages WHERE id_package = ?")
        .bind(id_package)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}

// packages_categories

pub async fn package_categories_all(
    pool: &SqlitePool,
) -> Result<Vec<PackageCategory>, DatabaseError> {
    let rows = sqlx::query_as::<_, PackageCategory>(
        "SELECT id, id_package, id_category FROM packages_categories",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn package_category_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<PackageCategory>, DatabaseError> {
    let row = sqlx::query_as::<_, PackageCategory>(
        "SELECT id, id_package, id_category FROM packages_categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn package_category_insert(
    pool: &SqlitePool,
    link: &NewPackageCategory,
) -> Result<i64, DatabaseError> {
    let result =
        sqlx::query("INSERT INTO packages_categories (id_package, id_category) VALUES (?, ?)")
            .bind(link.id_package)
            .bind(link.id_category)
            .execute(pool)
            .await?;
    Ok(result.last_insert_rowid())
}

pub async fn package_category_update(
    pool: &SqlitePool,
    id: i64,
    patch: &PackageCategoryPatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("packages_categories")
        .set("id_package", &patch.id_package)
        .set("id_category", &patch.id_category)
        .apply(pool, "id", id)
        .await
}

pub async fn package_category_delete(
    pool: &SqlitePool,
    id: i64,
) -> Result<MutationOutcome, DatabaseError> {
    let result = sqlx::query("DELETE FROM packages_categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}

pub async fn delete_categories_by_package<'e, E>(
    executor: E,
    id_package: i64,
) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM packages_categories WHERE id_package = ?")
        .bind(id_package)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_bulk(result.rows_affected()))
}
