mod common;

use axum_test::TestServer;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[sqlx::test]
async fn test_add_favorite_returns_card(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;
    let recipe = common::create_test_recipe(&pool, chef, "Borscht", "favadd01").await;

    let server = make_server(pool);
    let response = server
        .post(&format!("/api/recipes/{recipe}/favorite"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], recipe);
    assert_eq!(json["name"], "Borscht");
    assert_eq!(json["image"], "/media/recipes/test.png");
    assert_eq!(json["cooking_time"], 15);
    // The card carries no viewer flags or relations.
    assert!(json.get("is_favorited").is_none());
    assert!(json.get("ingredients").is_none());
}

#[sqlx::test]
async fn test_add_favorite_twice_is_rejected(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;
    let recipe = common::create_test_recipe(&pool, chef, "Borscht", "favdup01").await;
    common::add_favorite(&pool, viewer, recipe).await;

    let server = make_server(pool);
    let response = server
        .post(&format!("/api/recipes/{recipe}/favorite"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_add_favorite_unknown_recipe(pool: PgPool) {
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;

    let server = make_server(pool);
    let response = server
        .post("/api/recipes/999999/favorite")
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_add_favorite_requires_auth(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let recipe = common::create_test_recipe(&pool, chef, "Borscht", "favanon1").await;

    let server = make_server(pool);
    let response = server.post(&format!("/api/recipes/{recipe}/favorite")).await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_remove_favorite(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;
    let recipe = common::create_test_recipe(&pool, chef, "Borscht", "favrem01").await;
    common::add_favorite(&pool, viewer, recipe).await;

    let server = make_server(pool);
    let response = server
        .delete(&format!("/api/recipes/{recipe}/favorite"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // The flag is gone from the recipe detail.
    let detail = server
        .get(&format!("/api/recipes/{recipe}"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;
    detail.assert_status_ok();
    assert_eq!(detail.json::<serde_json::Value>()["is_favorited"], false);
}

#[sqlx::test]
async fn test_remove_favorite_not_favorited(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let viewer = common::create_test_user(&pool, "viewer").await;
    common::create_test_token(&pool, viewer, "tok-viewer").await;
    let recipe = common::create_test_recipe(&pool, chef, "Borscht", "favrem02").await;

    let server = make_server(pool);
    let response = server
        .delete(&format!("/api/recipes/{recipe}/favorite"))
        .add_header("Authorization", common::bearer("tok-viewer"))
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
