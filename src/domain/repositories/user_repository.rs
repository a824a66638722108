//! User account storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for user records.
///
/// Implemented by [`crate::infrastructure::persistence::PgUserRepository`];
/// a mockall double is generated under `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// [`AppError::Conflict`] when the username or email is taken;
    /// database failures surface as [`AppError::Internal`].
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Fetches all users whose ids appear in `ids`. Missing ids are
    /// silently skipped; order is unspecified. Used to resolve the
    /// authors of a page of recipes in one query.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError>;

    /// Finds a user by username, used by the operator CLI.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
