//! Shopping cart storage and ingredient aggregation.

use crate::domain::entities::ShoppingListItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the (user, recipe) cart relation and the ingredient
/// aggregation over it.
///
/// Implemented by [`crate::infrastructure::persistence::PgCartRepository`];
/// a mockall double is generated under `cfg(test)`, and
/// `tests/repository_cart.rs` exercises the real queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Adds a recipe to the user's cart. Returns `Ok(false)` when the
    /// pair already existed, `Ok(true)` when a row was inserted.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Removes a recipe from the cart. Returns `Ok(false)` when no row
    /// matched.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Of the given recipe ids, returns those present in the user's
    /// cart. Used to flag a whole page of recipes in one query.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn filter_in_cart(&self, user_id: i64, recipe_ids: &[i64])
    -> Result<Vec<i64>, AppError>;

    /// Names of the recipes in the user's cart, alphabetical.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn recipe_names(&self, user_id: i64) -> Result<Vec<String>, AppError>;

    /// Aggregates ingredient amounts across every recipe in the user's
    /// cart in one consistent read: grouped by ingredient record, summed
    /// as integers, ordered by name, unit, then ingredient id.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn aggregate_ingredients(&self, user_id: i64) -> Result<Vec<ShoppingListItem>, AppError>;
}
