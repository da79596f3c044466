//! Shared harness for the integration tests: an isolated in-memory store per
//! test, driven through the full router without binding a socket.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use learnhub_api::database::manager;
use learnhub_api::router::{app, AppState};

pub async fn test_app() -> Router {
    let pool = manager::connect_in_memory().await.expect("in-memory pool");
    app(AppState { pool })
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

// Seed helpers go through the public API so every fixture respects the same
// gates the tests exercise.

pub async fn seed_user(app: &Router, email: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/users",
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "password": "engine1843"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed_user: {}", body);
    body["id"].as_i64().expect("user id")
}

pub async fn seed_article(app: &Router, id_user: i64, title: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/articles",
        json!({
            "title": title,
            "id_user": id_user,
            "main_image": null,
            "main_content": "Some content"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed_article: {}", body);
    body["id"].as_i64().expect("article id")
}

pub async fn seed_package(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/packages",
        json!({ "name": name, "description": null }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed_package: {}", body);
    body["id"].as_i64().expect("package id")
}

pub async fn seed_category(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/categories", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "seed_category: {}", body);
    body["id"].as_i64().expect("category id")
}
