use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::update_builder::Patch;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub user_picture: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub id_theme: i64,
    pub id_language: i64,
    pub is_admin: i64,
    pub registration_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub user_picture: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "default_theme")]
    pub id_theme: i64,
    #[serde(default = "default_language")]
    pub id_language: i64,
    #[serde(default)]
    pub is_admin: i64,
}

fn default_theme() -> i64 {
    1
}

fn default_language() -> i64 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub first_name: Patch<String>,
    #[serde(default)]
    pub last_name: Patch<String>,
    #[serde(default)]
    pub phone_number: Patch<Option<String>>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub user_picture: Patch<Option<String>>,
    #[serde(default)]
    pub password: Patch<String>,
    #[serde(default)]
    pub id_theme: Patch<i64>,
    #[serde(default)]
    pub id_language: Patch<i64>,
    #[serde(default)]
    pub is_admin: Patch<i64>,
}
