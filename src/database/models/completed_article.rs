use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Progress/feedback record: a (user, article) pair with an optional rating.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompletedArticle {
    pub id: i64,
    pub id_user: i64,
    pub id_article: i64,
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompletedArticle {
    pub id_article: i64,
    pub rating: Option<i64>,
}
