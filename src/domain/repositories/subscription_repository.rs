//! Subscription storage.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the (follower, author) subscription relation.
///
/// Implemented by
/// [`crate::infrastructure::persistence::PgSubscriptionRepository`]; a
/// mockall double is generated under `cfg(test)`, and
/// `tests/handler_subscriptions.rs` exercises the real queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Subscribes `user_id` to `author_id`. Returns `Ok(false)` when the
    /// pair already existed, `Ok(true)` when a row was inserted.
    ///
    /// Self-subscription is rejected upstream; the schema also carries a
    /// CHECK against it.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn add(&self, user_id: i64, author_id: i64) -> Result<bool, AppError>;

    /// Removes a subscription. Returns `Ok(false)` when no row matched.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn remove(&self, user_id: i64, author_id: i64) -> Result<bool, AppError>;

    /// Whether `user_id` follows `author_id`.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn is_subscribed(&self, user_id: i64, author_id: i64) -> Result<bool, AppError>;

    /// Of the given author ids, returns those `user_id` follows.
    /// Used to flag the authors of a whole page of recipes in one query.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn filter_subscribed(
        &self,
        user_id: i64,
        author_ids: &[i64],
    ) -> Result<Vec<i64>, AppError>;

    /// Authors the user follows, oldest subscription first, paginated.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn authors_for(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, AppError>;

    /// Counts the user's subscriptions.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn count_for(&self, user_id: i64) -> Result<i64, AppError>;
}
