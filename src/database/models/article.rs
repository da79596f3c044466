use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::update_builder::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub id_user: i64,
    pub main_image: Option<String>,
    pub main_content: String,
    pub creation_date: NaiveDateTime,
    pub last_update_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub id_user: i64,
    pub main_image: Option<String>,
    pub main_content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub id_user: Patch<i64>,
    #[serde(default)]
    pub main_image: Patch<Option<String>>,
    #[serde(default)]
    pub main_content: Patch<String>,
}
