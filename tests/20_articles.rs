mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn list_filters_compose_with_and_semantics() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let rust_intro = seed_article(&app, id_user, "Rust for beginners").await;
    let rust_deep = seed_article(&app, id_user, "Advanced Rust patterns").await;
    seed_article(&app, id_user, "Baking bread").await;

    let id_category = seed_category(&app, "Programming").await;
    for id_article in [rust_intro, rust_deep] {
        let (status, _) = post(
            &app,
            "/api/articlescategories",
            json!({ "id_article": id_article, "id_category": id_category }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // No filter: everything
    let (_, body) = get(&app, "/api/articles").await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Title fragment only
    let (_, body) = get(&app, "/api/articles?title=Rust").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Category only
    let (_, body) = get(&app, &format!("/api/articles?tag={}", id_category)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Both: intersection
    let (_, body) = get(&app, &format!("/api/articles?tag={}&title=beginners", id_category)).await;
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["title"], "Rust for beginners");

    // Empty filter values are ignored, and baking never had a category
    let (_, body) = get(&app, "/api/articles?title=&tag=").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    let (_, body) = get(&app, &format!("/api/articles?tag={}&title=bread", id_category)).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn non_numeric_tag_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/articles?tag=rust").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_requires_an_existing_author() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/api/articles",
        json!({
            "title": "Orphan piece",
            "id_user": 999,
            "main_content": "text"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/api/articles").await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn partial_update_can_clear_the_image() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;

    let (status, body) = post(
        &app,
        "/api/articles",
        json!({
            "title": "Illustrated",
            "id_user": id_user,
            "main_image": "cover.png",
            "main_content": "text"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id_article = body["id"].as_i64().unwrap();

    // Subset update: title only, image untouched
    let (status, body) = put(
        &app,
        &format!("/api/articles/{}", id_article),
        json!({ "title": "Illustrated, 2nd ed." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Illustrated, 2nd ed.");
    assert_eq!(body["main_image"], "cover.png");

    // Explicit null clears the optional column
    let (status, body) = put(
        &app,
        &format!("/api/articles/{}", id_article),
        json!({ "main_image": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["main_image"].is_null());
    assert_eq!(body["title"], "Illustrated, 2nd ed.");
}

#[tokio::test]
async fn update_of_missing_article_is_not_found() {
    let app = test_app().await;
    let (status, _) = put(&app, "/api/articles/42", json!({ "title": "Ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_article_cascades_through_dependents() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Short lived").await;
    let id_category = seed_category(&app, "Misc").await;
    let id_package = seed_package(&app, "Starter").await;

    post(
        &app,
        "/api/articlescategories",
        json!({ "id_article": id_article, "id_category": id_category }),
    )
    .await;
    post(
        &app,
        &format!("/api/packages/{}/articles", id_package),
        json!({ "id_article": id_article }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/bookmarks", id_user),
        json!({ "id_article": id_article }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/comments", id_user),
        json!({ "id_article": id_article, "content": "first!" }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/articles/{}", id_article)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/articles/{}", id_article)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, links) = get(&app, "/api/articlescategories").await;
    assert_eq!(links.as_array().unwrap().len(), 0);
    let (_, links) = get(&app, "/api/articlespackages").await;
    assert_eq!(links.as_array().unwrap().len(), 0);
    let (_, comments) = get(&app, "/api/comments").await;
    assert_eq!(comments.as_array().unwrap().len(), 0);
    let (_, bookmarks) = get(&app, &format!("/api/users/{}/bookmarks", id_user)).await;
    assert_eq!(bookmarks.as_array().unwrap().len(), 0);
    // Owning rows survive the cascade
    let (status, _) = get(&app, &format!("/api/users/{}", id_user)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/api/packages/{}", id_package)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn comments_are_scoped_to_their_article() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let first = seed_article(&app, id_user, "First").await;
    let second = seed_article(&app, id_user, "Second").await;

    post(
        &app,
        &format!("/api/users/{}/comments", id_user),
        json!({ "id_article": first, "content": "on first" }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/comments", id_user),
        json!({ "id_article": second, "content": "on second" }),
    )
    .await;

    let (_, body) = get(&app, &format!("/api/articles/{}/comments", first)).await;
    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "on first");
}
