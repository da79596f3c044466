//! Pure join rows for the many-to-many relations. They have no lifecycle of
//! their own beyond the relation's existence, but the admin surface exposes
//! plain CRUD over them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::update_builder::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArticleCategory {
    pub id: i64,
    pub id_article: i64,
    pub id_category: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticleCategory {
    pub id_article: i64,
    pub id_category: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleCategoryPatch {
    #[serde(default)]
    pub id_article: Patch<i64>,
    #[serde(default)]
    pub id_category: Patch<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArticlePackage {
    pub id: i64,
    pub id_article: i64,
    pub id_package: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticlePackage {
    pub id_article: i64,
    pub id_package: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePackagePatch {
    #[serde(default)]
    pub id_article: Patch<i64>,
    #[serde(default)]
    pub id_package: Patch<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PackageCategory {
    pub id: i64,
    pub id_package: i64,
    pub id_category: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackageCategory {
    pub id_package: i64,
    pub id_category: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageCategoryPatch {
    #[serde(default)]
    pub id_package: Patch<i64>,
    #[serde(default)]
    pub id_category: Patch<i64>,
}
