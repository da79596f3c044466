use axum::{routing::get, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Process-scoped state shared by every in-flight request. The pool is
/// opened once at startup and released on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(user_routes())
        .merge(article_routes())
        .merge(package_routes())
        .merge(category_routes())
        .merge(comment_routes())
        .merge(faq_routes())
        .merge(guide_routes())
        .merge(association_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use axum::routing::{post, put};
    use handlers::users;

    Router::new()
        .route("/api/users", get(users::get_all).post(users::add))
        .route(
            "/api/users/:id_user",
            get(users::get_one).put(users::update).delete(users::remove),
        )
        // Bookmarks
        .route(
            "/api/users/:id_user/bookmarks",
            get(users::bookmarks)
                .post(users::add_bookmark)
                .delete(users::remove_all_bookmarks),
        )
        .route(
            "/api/users/:id_user/bookmarks/:id_article",
            get(users::bookmark_by_article).delete(users::remove_bookmark),
        )
        .route("/api/users/:id_user/articles", get(users::bookmarked_articles))
        // Completed articles
        .route(
            "/api/users/:id_user/completedarticles",
            get(users::completed)
                .post(users::add_completed)
                .delete(users::remove_completed),
        )
        .route(
            "/api/users/:id_user/completedarticles/:id_article",
            get(users::completed_by_article),
        )
        .route(
            "/api/users/:id_user/packages/:id_package/completedarticles",
            get(users::completed_by_package),
        )
        // Followed packages
        .route(
            "/api/users/:id_user/followedpackages",
            get(users::followed).post(users::follow).delete(users::unfollow_all),
        )
        .route(
            "/api/users/:id_user/followedpackages/:id_package",
            get(users::followed_by_package).delete(users::unfollow),
        )
        .route("/api/users/:id_user/packages", get(users::discover_packages))
        // Comments authored by a user
        .route("/api/users/:id_user/comments", post(users::add_comment))
        .route("/api/users/:id_user/comments/:id_comment", put(users::update_comment))
}

fn article_routes() -> Router<AppState> {
    use handlers::articles;

    Router::new()
        .route("/api/articles", get(articles::get_all).post(articles::add))
        .route(
            "/api/articles/:id_article",
            get(articles::get_one)
                .put(articles::update)
                .delete(articles::remove),
        )
        .route("/api/articles/:id_article/comments", get(articles::comments))
        .route("/api/articles/:id_article/categories", get(articles::categories))
}

fn package_routes() -> Router<AppState> {
    use handlers::packages;

    Router::new()
        .route("/api/packages", get(packages::get_all).post(packages::add))
        .route(
            "/api/packages/:id_package",
            get(packages::get_one)
                .put(packages::update)
                .delete(packages::remove),
        )
        .route(
            "/api/packages/:id_package/articles",
            get(packages::articles).post(packages::add_article),
        )
        .route("/api/packages/:id_package/categories", get(packages::categories))
}

fn category_routes() -> Router<AppState> {
    use handlers::categories;

    Router::new()
        .route("/api/categories", get(categories::get_all).post(categories::add))
        .route(
            "/api/categories/:id_category",
            get(categories::get_one)
                .put(categories::update)
                .delete(categories::remove),
        )
}

fn comment_routes() -> Router<AppState> {
    use handlers::comments;

    Router::new()
        .route("/api/comments", get(comments::get_all))
        .route(
            "/api/comments/:id_comment",
            get(comments::get_one).delete(comments::remove),
        )
}

fn faq_routes() -> Router<AppState> {
    use handlers::faqs;

    Router::new()
        .route("/api/faq", get(faqs::get_all).post(faqs::add))
        .route(
            "/api/faq/:id_faq",
            get(faqs::get_one).put(faqs::update).delete(faqs::remove),
        )
}

fn guide_routes() -> Router<AppState> {
    use handlers::guides;

    Router::new()
        .route("/api/guide", get(guides::get_all).post(guides::add))
        .route(
            "/api/guide/:id_guide",
            get(guides::get_one).put(guides::update).delete(guides::remove),
        )
}

fn association_routes() -> Router<AppState> {
    use handlers::associations;

    Router::new()
        .route(
            "/api/articlescategories",
            get(associations::article_categories_all).post(associations::article_category_add),
        )
        .route(
            "/api/articlescategories/:id",
            get(associations::article_category_get)
                .put(associations::article_category_update)
                .delete(associations::article_category_remove),
        )
        .route(
            "/api/articlespackages",
            get(associations::article_packages_all).post(associations::article_package_add),
        )
        .route(
            "/api/articlespackages/:id",
            get(associations::article_package_get)
                .put(associations::article_package_update)
                .delete(associations::article_package_remove),
        )
        .route(
            "/api/packagescategories",
            get(associations::package_categories_all).post(associations::package_category_add),
        )
        .route(
            "/api/packagescategories/:id",
            get(associations::package_category_get)
                .put(associations::package_category_update)
                .delete(associations::package_category_remove),
        )
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> (axum::http::StatusCode, axum::Json<Value>) {
    use axum::{http::StatusCode, Json};

    let now = chrono::Utc::now();

    match crate::database::manager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": { "status": "degraded", "timestamp": now, "database_error": e.to_string() }
            })),
        ),
    }
}
