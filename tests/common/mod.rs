#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

use foodgram_backend::api::handlers::{health_handler, redirect_handler};
use foodgram_backend::api::middleware::auth;
use foodgram_backend::api::routes::{protected_routes, public_routes};
use foodgram_backend::application::services::{
    AuthService, CatalogService, FavoriteService, RecipeService, ShoppingListService,
    ShortLinkService, SubscriptionService,
};
use foodgram_backend::infrastructure::cache::{CacheService, NullCache};
use foodgram_backend::infrastructure::persistence::{
    PgCartRepository, PgFavoriteRepository, PgIngredientRepository, PgRecipeRepository,
    PgSubscriptionRepository, PgTagRepository, PgTokenRepository, PgUserRepository,
};
use foodgram_backend::state::AppState;
use foodgram_backend::utils::token_hash::hash_token;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an [`AppState`] over the test pool with a no-op cache.
pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let cache: Arc<dyn CacheService> = Arc::new(NullCache::new());

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));
    let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));
    let ingredient_repo = Arc::new(PgIngredientRepository::new(pool.clone()));
    let recipe_repo = Arc::new(PgRecipeRepository::new(pool.clone()));
    let favorite_repo = Arc::new(PgFavoriteRepository::new(pool.clone()));
    let cart_repo = Arc::new(PgCartRepository::new(pool.clone()));
    let subscription_repo = Arc::new(PgSubscriptionRepository::new(pool.clone()));

    AppState {
        auth_service: Arc::new(AuthService::new(
            token_repo,
            user_repo.clone(),
            TEST_SIGNING_SECRET.to_string(),
        )),
        catalog_service: Arc::new(CatalogService::new(
            tag_repo.clone(),
            ingredient_repo.clone(),
        )),
        recipe_service: Arc::new(RecipeService::new(
            recipe_repo.clone(),
            tag_repo,
            ingredient_repo,
        )),
        favorite_service: Arc::new(FavoriteService::new(favorite_repo, recipe_repo.clone())),
        shopping_list_service: Arc::new(ShoppingListService::new(cart_repo, recipe_repo.clone())),
        short_link_service: Arc::new(ShortLinkService::new(
            recipe_repo.clone(),
            cache.clone(),
            TEST_BASE_URL.to_string(),
        )),
        subscription_service: Arc::new(SubscriptionService::new(
            subscription_repo,
            user_repo,
            recipe_repo,
        )),
        cache,
        media_root: PathBuf::from("media"),
        shopping_list_font: None,
    }
}

/// Full application router with auth middleware, minus rate limiting.
///
/// Mirrors the production composition: protected routes behind the
/// bearer-token requirement, public routes behind optional identification,
/// plus the short-link redirect outside `/api`.
pub fn create_test_app(state: AppState) -> Router {
    let api_public = public_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::identify,
    ));
    let api_protected = protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require,
    ));
    let api_router = Router::new().merge(api_protected).merge(api_public);

    Router::new()
        .route("/s/{token}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
}

/// `Authorization` header value for a raw token.
pub fn bearer(raw_token: &str) -> String {
    format!("Bearer {raw_token}")
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, first_name, last_name)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind("Test")
    .bind("User")
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Stores an API token for `user_id`; requests authenticating with
/// `raw_token` resolve to that user.
pub async fn create_test_token(pool: &PgPool, user_id: i64, raw_token: &str) {
    sqlx::query("INSERT INTO api_tokens (user_id, name, token_hash) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind("test token")
        .bind(hash_token(TEST_SIGNING_SECRET, raw_token))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_tag(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_ingredient(pool: &PgPool, name: &str, unit: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(unit)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_recipe(
    pool: &PgPool,
    author_id: i64,
    name: &str,
    short_code: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO recipes (author_id, name, instructions, image, cooking_time, short_code)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(author_id)
    .bind(name)
    .bind("Cook it well.")
    .bind("/media/recipes/test.png")
    .bind(15)
    .bind(short_code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn tag_recipe(pool: &PgPool, recipe_id: i64, tag_id: i64) {
    sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
        .bind(recipe_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn add_recipe_ingredient(pool: &PgPool, recipe_id: i64, ingredient_id: i64, amount: i32) {
    sqlx::query(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
    )
    .bind(recipe_id)
    .bind(ingredient_id)
    .bind(amount)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn add_favorite(pool: &PgPool, user_id: i64, recipe_id: i64) {
    sqlx::query("INSERT INTO favorites (user_id, recipe_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn add_cart_item(pool: &PgPool, user_id: i64, recipe_id: i64) {
    sqlx::query("INSERT INTO shopping_cart_items (user_id, recipe_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn add_subscription(pool: &PgPool, user_id: i64, author_id: i64) {
    sqlx::query("INSERT INTO subscriptions (user_id, author_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(author_id)
        .execute(pool)
        .await
        .unwrap();
}
