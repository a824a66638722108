//! Favorites storage.

use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the (user, recipe) favorites relation.
///
/// Implemented by
/// [`crate::infrastructure::persistence::PgFavoriteRepository`]; a
/// mockall double is generated under `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Adds a favorite. Returns `Ok(false)` when the pair already
    /// existed, `Ok(true)` when a row was inserted.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Removes a favorite. Returns `Ok(false)` when no row matched.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Of the given recipe ids, returns those the user has favorited.
    /// Used to flag a whole page of recipes in one query.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn filter_favorited(
        &self,
        user_id: i64,
        recipe_ids: &[i64],
    ) -> Result<Vec<i64>, AppError>;
}
