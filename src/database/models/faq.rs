use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::update_builder::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqPatch {
    #[serde(default)]
    pub question: Patch<String>,
    #[serde(default)]
    pub answer: Patch<String>,
}
