mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn follow_then_refollow_is_a_conflict() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_package = seed_package(&app, "Foundations").await;

    let (status, body) = post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": id_package }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id_package"].as_i64().unwrap(), id_package);

    let (status, body) = post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": id_package }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    // The follow list holds exactly one entry
    let (_, followed) = get(&app, &format!("/api/users/{}/followedpackages", id_user)).await;
    assert_eq!(followed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn follow_gates_run_before_the_write() {
    let app = test_app().await;
    let id_package = seed_package(&app, "Foundations").await;

    // Unknown user: first gate fails, nothing is written
    let (status, _) = post(
        &app,
        "/api/users/999/followedpackages",
        json!({ "id_package": id_package }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown package: second gate fails
    let app2 = test_app().await;
    let id_user = seed_user(&app2, "ada@example.com").await;
    let (status, _) = post(
        &app2,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, followed) = get(&app2, &format!("/api/users/{}/followedpackages", id_user)).await;
    assert_eq!(followed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unfollow_requires_an_existing_subscription() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_package = seed_package(&app, "Foundations").await;

    let (status, _) = delete(
        &app,
        &format!("/api/users/{}/followedpackages/{}", id_user, id_package),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": id_package }),
    )
    .await;

    let (status, _) = delete(
        &app,
        &format!("/api/users/{}/followedpackages/{}", id_user, id_package),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn discovery_listing_excludes_followed_packages() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let followed = seed_package(&app, "Followed").await;
    let other = seed_package(&app, "Untouched").await;

    post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": followed }),
    )
    .await;

    let (_, body) = get(&app, &format!("/api/users/{}/packages", id_user)).await;
    let discoverable = body.as_array().unwrap();
    assert_eq!(discoverable.len(), 1);
    assert_eq!(discoverable[0]["id"].as_i64().unwrap(), other);
}

#[tokio::test]
async fn linking_an_article_twice_is_a_conflict() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Intro").await;
    let id_package = seed_package(&app, "Foundations").await;

    let (status, _) = post(
        &app,
        &format!("/api/packages/{}/articles", id_package),
        json!({ "id_article": id_article }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        &format!("/api/packages/{}/articles", id_package),
        json!({ "id_article": id_article }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (_, articles) = get(&app, &format!("/api/packages/{}/articles", id_package)).await;
    assert_eq!(articles.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_package_cascades_but_spares_articles() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let id_article = seed_article(&app, id_user, "Intro").await;
    let id_package = seed_package(&app, "Foundations").await;
    let id_category = seed_category(&app, "Programming").await;

    post(
        &app,
        &format!("/api/packages/{}/articles", id_package),
        json!({ "id_article": id_article }),
    )
    .await;
    post(
        &app,
        "/api/packagescategories",
        json!({ "id_package": id_package, "id_category": id_category }),
    )
    .await;
    post(
        &app,
        &format!("/api/users/{}/followedpackages", id_user),
        json!({ "id_package": id_package }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/packages/{}", id_package)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/packages/{}", id_package)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, links) = get(&app, "/api/articlespackages").await;
    assert_eq!(links.as_array().unwrap().len(), 0);
    let (_, links) = get(&app, "/api/packagescategories").await;
    assert_eq!(links.as_array().unwrap().len(), 0);
    let (_, followed) = get(&app, &format!("/api/users/{}/followedpackages", id_user)).await;
    assert_eq!(followed.as_array().unwrap().len(), 0);
    // Member articles are not owned by the package
    let (status, _) = get(&app, &format!("/api/articles/{}", id_article)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn completed_articles_can_be_scoped_to_a_package() {
    let app = test_app().await;
    let id_user = seed_user(&app, "ada@example.com").await;
    let inside = seed_article(&app, id_user, "In the package").await;
    let outside = seed_article(&app, id_user, "Elsewhere").await;
    let id_package = seed_package(&app, "Foundations").await;

    post(
        &app,
        &format!("/api/packages/{}/articles", id_package),
        json!({ "id_article": inside }),
    )
    .await;
    for id_article in [inside, outside] {
        post(
            &app,
            &format!("/api/users/{}/completedarticles", id_user),
            json!({ "id_article": id_article, "rating": 4 }),
        )
        .await;
    }

    let (_, body) = get(
        &app,
        &format!("/api/users/{}/packages/{}/completedarticles", id_user, id_package),
    )
    .await;
    let completions = body.as_array().unwrap();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0]["id_article"].as_i64().unwrap(), inside);
}

#[tokio::test]
async fn package_health_endpoint_reports_ok() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}
