use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subscription relation between a user and a package.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FollowedPackage {
    pub id: i64,
    pub id_user: i64,
    pub id_package: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFollowedPackage {
    pub id_package: i64,
}
