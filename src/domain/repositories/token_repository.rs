//! Token storage behind Bearer authentication.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A minted API token. `token_hash` is the HMAC-SHA256 of the raw value;
/// the plaintext exists only in the minting CLI's output.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Storage for API tokens, each owned by one user.
///
/// Implemented by [`crate::infrastructure::persistence::PgTokenRepository`];
/// a mockall double is generated under `cfg(test)`, and
/// `tests/repository_token.rs` exercises the real queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Resolves a token hash to its owning user id. `Ok(None)` means
    /// unknown or revoked; callers cannot tell the two apart.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn validate_token(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Stamps the token's `last_used_at` with the current time.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Records a minted token under its label and hash.
    ///
    /// # Errors
    ///
    /// [`AppError::Conflict`] when the hash is already recorded;
    /// database failures surface as [`AppError::Internal`].
    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError>;

    /// Tokens newest first, narrowed to one owner when `user_id` is
    /// given.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn list_tokens(&self, user_id: Option<i64>) -> Result<Vec<ApiToken>, AppError>;

    /// Stamps `revoked_at`, after which the token no longer validates.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when no such token exists; database
    /// failures surface as [`AppError::Internal`].
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
