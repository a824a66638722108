mod common;

use sqlx::PgPool;
use std::sync::Arc;

use foodgram_backend::domain::repositories::TokenRepository;
use foodgram_backend::error::AppError;
use foodgram_backend::infrastructure::persistence::PgTokenRepository;

#[sqlx::test]
async fn test_create_token(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token(user_id, "ci-token", "hash123")
        .await
        .unwrap();

    assert_eq!(token.user_id, user_id);
    assert_eq!(token.name, "ci-token");
    assert_eq!(token.token_hash, "hash123");
    assert!(token.last_used_at.is_none());
    assert!(token.revoked_at.is_none());
}

#[sqlx::test]
async fn test_create_token_duplicate_hash_conflicts(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token(user_id, "first", "samehash")
        .await
        .unwrap();
    let result = repo.create_token(user_id, "second", "samehash").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_validate_token_resolves_user(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token(user_id, "valid", "validhash")
        .await
        .unwrap();

    let resolved = repo.validate_token("validhash").await.unwrap();

    assert_eq!(resolved, Some(user_id));
}

#[sqlx::test]
async fn test_validate_token_unknown(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let resolved = repo.validate_token("nonexistent").await.unwrap();

    assert_eq!(resolved, None);
}

#[sqlx::test]
async fn test_validate_token_revoked(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token(user_id, "revoked", "revokedhash")
        .await
        .unwrap();
    repo.revoke_token(token.id).await.unwrap();

    let resolved = repo.validate_token("revokedhash").await.unwrap();

    assert_eq!(resolved, None);
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    let token = repo
        .create_token(user_id, "tracked", "trackedhash")
        .await
        .unwrap();

    repo.update_last_used("trackedhash").await.unwrap();

    let last_used: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_used_at FROM api_tokens WHERE id = $1")
            .bind(token.id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(last_used.is_some());
}

#[sqlx::test]
async fn test_list_tokens_narrowed_by_user(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let baker = common::create_test_user(&pool, "baker").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token(chef, "chef-1", "hash1").await.unwrap();
    repo.create_token(chef, "chef-2", "hash2").await.unwrap();
    repo.create_token(baker, "baker-1", "hash3").await.unwrap();

    let all = repo.list_tokens(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let chefs_only = repo.list_tokens(Some(chef)).await.unwrap();
    assert_eq!(chefs_only.len(), 2);
    assert!(chefs_only.iter().all(|t| t.user_id == chef));
}

#[sqlx::test]
async fn test_revoke_token(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    let token = repo
        .create_token(user_id, "doomed", "doomedhash")
        .await
        .unwrap();

    repo.revoke_token(token.id).await.unwrap();

    let revoked_at: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT revoked_at FROM api_tokens WHERE id = $1")
            .bind(token.id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(revoked_at.is_some());
}

#[sqlx::test]
async fn test_revoke_twice_is_not_found(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "chef").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token(user_id, "double", "doublehash")
        .await
        .unwrap();

    repo.revoke_token(token.id).await.unwrap();
    let result = repo.revoke_token(token.id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}
