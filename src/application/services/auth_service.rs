//! Bearer-token authentication.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use crate::utils::token_hash::hash_token;
use serde_json::json;

/// Resolves Bearer tokens to user accounts.
///
/// Presented tokens are hashed with HMAC-SHA256 under `signing_secret`
/// and matched against stored hashes, so the database never sees a raw
/// token; see [`crate::utils::token_hash`].
pub struct AuthService<T: TokenRepository, U: UserRepository> {
    token_repository: Arc<T>,
    user_repository: Arc<U>,
    signing_secret: String,
}

impl<T: TokenRepository, U: UserRepository> AuthService<T, U> {
    /// `signing_secret` must match the value the tokens were minted with.
    pub fn new(token_repository: Arc<T>, user_repository: Arc<U>, signing_secret: String) -> Self {
        Self {
            token_repository,
            user_repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token and loads the account that owns it.
    ///
    /// Also touches the token's `last_used` timestamp; a failed touch is
    /// logged and swallowed, it must not fail an otherwise valid request.
    ///
    /// # Errors
    ///
    /// [`AppError::Unauthorized`] for an unknown or revoked token, and
    /// for a token whose owner no longer exists. Database failures
    /// surface as [`AppError::Internal`].
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let Some(user_id) = self.token_repository.validate_token(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Token owner no longer exists"}),
                )
            })?;

        if let Err(e) = self.token_repository.update_last_used(&token_hash).await {
            tracing::debug!("failed to update token last_used timestamp: {}", e);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockTokenRepository, MockUserRepository};
    use chrono::Utc;

    const SECRET: &str = "unit-test-signing-key";

    fn account(id: i64) -> User {
        User::new(
            id,
            "chef".to_string(),
            "chef@example.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            None,
            Utc::now(),
        )
    }

    fn service(
        tokens: MockTokenRepository,
        users: MockUserRepository,
    ) -> AuthService<MockTokenRepository, MockUserRepository> {
        AuthService::new(Arc::new(tokens), Arc::new(users), SECRET.to_string())
    }

    #[tokio::test]
    async fn test_authenticate_resolves_owner() {
        let mut tokens = MockTokenRepository::new();
        let mut users = MockUserRepository::new();

        let raw = "raw-bearer-token";
        let expected_hash = hash_token(SECRET, raw);

        tokens
            .expect_validate_token()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(42)));
        tokens
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));
        users
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|id| Ok(Some(account(id))));

        let user = service(tokens, users).authenticate(raw).await.unwrap();

        assert_eq!(user.id, 42);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_unknown_token() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_validate_token()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(tokens, MockUserRepository::new())
            .authenticate("no-such-token")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_orphaned_token() {
        let mut tokens = MockTokenRepository::new();
        let mut users = MockUserRepository::new();

        tokens
            .expect_validate_token()
            .times(1)
            .returning(|_| Ok(Some(42)));
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(tokens, users).authenticate("orphaned").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_survives_last_used_failure() {
        let mut tokens = MockTokenRepository::new();
        let mut users = MockUserRepository::new();

        tokens
            .expect_validate_token()
            .times(1)
            .returning(|_| Ok(Some(42)));
        tokens
            .expect_update_last_used()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(account(id))));

        let result = service(tokens, users).authenticate("still-valid").await;

        assert!(result.is_ok());
    }
}
