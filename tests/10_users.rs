mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn create_user_echoes_payload_with_id() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "password": "cobol1959"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["first_name"], "Grace");
    assert_eq!(body["email"], "grace@example.com");
    // Passwords never leave the service
    assert!(body.get("password").is_none());
    // Defaults fill in the unspecified preferences
    assert_eq!(body["id_theme"], 1);
    assert_eq!(body["id_language"], 1);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = test_app().await;
    seed_user(&app, "ada@example.com").await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "first_name": "Other",
            "last_name": "Person",
            "email": "ada@example.com",
            "password": "different1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn invalid_payload_reports_every_field_error() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "first_name": "",
            "last_name": "Person",
            "email": "not-an-email",
            "password": "shrt"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let field_errors = body["field_errors"].as_object().unwrap();
    assert_eq!(field_errors.len(), 3);
    assert!(field_errors.contains_key("first_name"));
    assert!(field_errors.contains_key("email"));
    assert!(field_errors.contains_key("password"));
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/users/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn partial_update_touches_only_named_fields() {
    let app = test_app().await;
    let id = seed_user(&app, "ada@example.com").await;

    let (status, body) = put(
        &app,
        &format!("/api/users/{}", id),
        json!({ "first_name": "Augusta" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Augusta");
    // The rest is untouched
    assert_eq!(body["last_name"], "Lovelace");
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn empty_patch_is_a_noop() {
    let app = test_app().await;
    let id = seed_user(&app, "ada@example.com").await;

    let (status, body) = put(&app, &format!("/api/users/{}", id), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn patch_of_missing_user_is_not_found() {
    let app = test_app().await;
    let (status, _) = put(&app, "/api/users/42", json!({ "first_name": "Ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_patch_field_is_rejected() {
    let app = test_app().await;
    let id = seed_user(&app, "ada@example.com").await;

    let (status, body) = put(
        &app,
        &format!("/api/users/{}", id),
        json!({ "id_theme": 99 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"].as_object().unwrap().contains_key("id_theme"));
}

#[tokio::test]
async fn deleting_a_user_cascades_through_dependents() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Intro to engines").await;
    let id_package = seed_package(&app, "Foundations").await;

    // Give the user one of each dependent record
    post(
        &app,
        &format!("/api/users/{}/bookmarks", id_user),
        json!({ "id_article": id_article }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/completedarticles", id_user),
        json!({ "id_article": id_article, "rating": 5 }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": id_package }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/comments", id_user),
        json!({ "id_article": id_article, "content": "Nice read" }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/users/{}", id_user)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The user is gone and so are its traces
    let (status, _) = get(&app, &format!("/api/users/{}", id_user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, comments) = get(&app, "/api/comments").await;
    assert_eq!(comments.as_array().unwrap().len(), 0);
    let (_, article_comments) = get(&app, &format!("/api/articles/{}/comments", id_article)).await;
    assert_eq!(article_comments.as_array().unwrap().len(), 0);
    // The bookmarked article itself survives
    let (status, _) = get(&app, &format!("/api/articles/{}", id_article)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn second_delete_of_same_user_is_not_found() {
    let app = test_app().await;
    let id = seed_user(&app, "ada@example.com").await;

    let (status, _) = delete(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bookmark_pair_lookup_answers_null_when_absent() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Intro").await;

    let (status, body) = get(
        &app,
        &format!("/api/users/{}/bookmarks/{}", id_user, id_article),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    post(
        &app,
        &format!("/api/users/{}/bookmarks", id_user),
        json!({ "id_article": id_article }),
    )
    .await;

    let (status, body) = get(
        &app,
        &format!("/api/users/{}/bookmarks/{}", id_user, id_article),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id_article"].as_i64().unwrap(), id_article);
}

#[tokio::test]
async fn bookmarking_a_missing_article_is_blocked() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;

    let (status, _) = post(
        &app,
        &format!("/api/users/{}/bookmarks", id_user),
        json!({ "id_article": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Gate short-circuited before the write
    let (_, bookmarks) = get(&app, &format!("/api/users/{}/bookmarks", id_user)).await;
    assert_eq!(bookmarks.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn completed_article_rating_is_bounded() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Intro").await;

    let (status, _) = post(
        &app,
        &format!("/api/users/{}/completedarticles", id_user),
        json!({ "id_article": id_article, "rating": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = post(
        &app,
        &format!("/api/users/{}/completedarticles", id_user),
        json!({ "id_article": id_article, "rating": null }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["rating"].is_null());
}
