use sqlx::{Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::models::article::{Article, ArticlePatch, NewArticle};
use crate::database::update_builder::UpdateBuilder;
use crate::database::MutationOutcome;

const COLUMNS: &str =
    "a.id, a.title, a.id_user, a.main_image, a.main_content, a.creation_date, a.last_update_date";

/// List articles, optionally narrowed by a title fragment and/or a category.
/// Both filters bind caller input as data; when both are given they compose
/// with AND semantics.
pub async fn all(
    pool: &SqlitePool,
    title: Option<&str>,
    category: Option<i64>,
) -> Result<Vec<Article>, DatabaseError> {
    let mut builder = sqlx::QueryBuilder::<Sqlite>::new(format!(
        "SELECT {} FROM articles a",
        COLUMNS
    ));

    if let Some(category) = category {
        builder.push(" INNER JOIN articles_categories ac ON a.id = ac.id_article WHERE ac.id_category = ");
        builder.push_bind(category);
        if let Some(title) = title {
            builder.push(" AND a.title LIKE ");
            builder.push_bind(format!("%{}%", title));
        }
    } else if let Some(title) = title {
        builder.push(" WHERE a.title LIKE ");
        builder.push_bind(format!("%{}%", title));
    }

    let articles = builder
        .build_query_as::<Article>()
        .fetch_all(pool)
        .await?;
    Ok(articles)
}

pub async fn by_id(pool: &SqlitePool, id_article: i64) -> Result<Option<Article>, DatabaseError> {
    let article = sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles a WHERE a.id = ?",
        COLUMNS
    ))
    .bind(id_article)
    .fetch_optional(pool)
    .await?;
    Ok(article)
}

/// Articles a user has bookmarked (inner join over the association).
pub async fn bookmarked_by_user(
    pool: &SqlitePool,
    id_user: i64,
) -> Result<Vec<Article>, DatabaseError> {
    let articles = sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles a \
         INNER JOIN bookmarks b ON a.id = b.id_article WHERE b.id_user = ?",
        COLUMNS
    ))
    .bind(id_user)
    .fetch_all(pool)
    .await?;
    Ok(articles)
}

pub async fn by_package(pool: &SqlitePool, id_package: i64) -> Result<Vec<Article>, DatabaseError> {
    let articles = sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles a \
         INNER JOIN articles_packages ap ON a.id = ap.id_article WHERE ap.id_package = ?",
        COLUMNS
    ))
    .bind(id_package)
    .fetch_all(pool)
    .await?;
    Ok(articles)
}

pub async fn insert(pool: &SqlitePool, article: &NewArticle) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        "INSERT INTO articles (title, id_user, main_image, main_content, creation_date, last_update_date) \
         VALUES (?, ?, ?, ?, datetime('now'), datetime('now'))",
    )
    .bind(&article.title)
    .bind(article.id_user)
    .bind(&article.main_image)
    .bind(&article.main_content)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update(
    pool: &SqlitePool,
    id_article: i64,
    patch: &ArticlePatch,
) -> Result<MutationOutcome, DatabaseError> {
    UpdateBuilder::new("articles")
        .set("title", &patch.title)
        .set("id_user", &patch.id_user)
        .set("main_image", &patch.main_image)
        .set("main_content", &patch.main_content)
        .touch("last_update_date")
        .apply(pool, "id", id_article)
        .await
}

pub async fn delete<'e, E>(executor: E, id_article: i64) -> Result<MutationOutcome, DatabaseError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id_article)
        .execute(executor)
        .await?;
    Ok(MutationOutcome::from_keyed(result.rows_affected()))
}
