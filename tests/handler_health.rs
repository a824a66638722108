mod common;

use axum_test::TestServer;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[sqlx::test]
async fn test_health_check_healthy(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[sqlx::test]
async fn test_health_reports_tag_count(pool: PgPool) {
    common::create_test_tag(&pool, "Breakfast", "breakfast").await;
    common::create_test_tag(&pool, "Dinner", "dinner").await;

    let server = make_server(pool);
    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["database"]["message"], "Connected, 2 tags");
}

#[sqlx::test]
async fn test_health_needs_no_auth(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/health").await;

    response.assert_status_ok();
}
