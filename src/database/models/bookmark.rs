use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's saved article. Composite identity (user, article) plus a
/// surrogate id generated by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub id_user: i64,
    pub id_article: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookmark {
    pub id_article: i64,
}
