mod common;

use axum_test::TestServer;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[sqlx::test]
async fn test_me_returns_own_profile(pool: PgPool) {
    let user = common::create_test_user(&pool, "chef").await;
    common::create_test_token(&pool, user, "tok-chef").await;

    let server = make_server(pool);
    let response = server
        .get("/api/users/me")
        .add_header("Authorization", common::bearer("tok-chef"))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], user);
    assert_eq!(json["username"], "chef");
    assert_eq!(json["email"], "chef@example.com");
    assert_eq!(json["first_name"], "Test");
    assert_eq!(json["last_name"], "User");
    assert_eq!(json["is_subscribed"], false);
    assert!(json["avatar"].is_null());
}

#[sqlx::test]
async fn test_me_requires_auth(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/api/users/me").await;

    response.assert_status_unauthorized();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_user_detail_anonymous(pool: PgPool) {
    let user = common::create_test_user(&pool, "chef").await;

    let server = make_server(pool);
    let response = server.get(&format!("/api/users/{user}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["username"], "chef");
    assert_eq!(json["is_subscribed"], false);
}

#[sqlx::test]
async fn test_user_detail_reflects_subscription(pool: PgPool) {
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;
    let chef = common::create_test_user(&pool, "chef").await;
    common::add_subscription(&pool, viewer, chef).await;

    let server = make_server(pool);
    let response = server
        .get(&format!("/api/users/{chef}"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["is_subscribed"],
        true
    );
}

#[sqlx::test]
async fn test_user_detail_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/api/users/999999").await;

    response.assert_status_not_found();
}
