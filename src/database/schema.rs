use sqlx::SqlitePool;

use super::manager::DatabaseError;

// Referential integrity is deliberately not declared here: existence and
// uniqueness preconditions are enforced by the gates before any write, and
// dependent rows are removed by the cascade orchestrator. Keeping the store
// constraint-free matches the behavior the API contract is written against.
const TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        phone_number TEXT,
        email TEXT NOT NULL,
        user_picture TEXT,
        password TEXT NOT NULL,
        id_theme INTEGER NOT NULL DEFAULT 1,
        id_language INTEGER NOT NULL DEFAULT 1,
        is_admin INTEGER NOT NULL DEFAULT 0,
        registration_date TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        id_user INTEGER NOT NULL,
        main_image TEXT,
        main_content TEXT NOT NULL,
        creation_date TEXT NOT NULL DEFAULT (datetime('now')),
        last_update_date TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS bookmarks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_user INTEGER NOT NULL,
        id_article INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS completed_articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_user INTEGER NOT NULL,
        id_article INTEGER NOT NULL,
        rating INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS followed_packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_user INTEGER NOT NULL,
        id_package INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_user INTEGER NOT NULL,
        id_article INTEGER NOT NULL,
        content TEXT NOT NULL,
        comment_date TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    "CREATE TABLE IF NOT EXISTS faqs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS guides (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS articles_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_article INTEGER NOT NULL,
        id_category INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS articles_packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_article INTEGER NOT NULL,
        id_package INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS packages_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        id_package INTEGER NOT NULL,
        id_category INTEGER NOT NULL
    )",
];

/// Apply the schema, creating any missing tables. Idempotent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::manager;

    #[tokio::test]
    async fn schema_applies_twice_without_error() {
        let pool = manager::connect_in_memory().await.expect("pool");
        // connect_in_memory already applied it once
        ensure_schema(&pool).await.expect("idempotent");

        sqlx::query("INSERT INTO categories (name) VALUES ('Rust')")
            .execute(&pool)
            .await
            .expect("insert");
    }
}
