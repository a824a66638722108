//! Ingredient catalog storage.

use crate::domain::entities::{Ingredient, NewIngredient};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the ingredient catalog.
///
/// Like tags, ingredients are reference data maintained by the operator
/// import tooling and read by the API.
///
/// Implemented by
/// [`crate::infrastructure::persistence::PgIngredientRepository`]; a
/// mockall double is generated under `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Lists ingredients ordered by name, optionally filtered by a
    /// case-insensitive substring match on the name.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn list(&self, name_filter: Option<String>) -> Result<Vec<Ingredient>, AppError>;

    /// Finds an ingredient by id.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError>;

    /// Fetches the ingredients matching `ids`; missing ids are silently
    /// absent from the result, which callers use for existence checks.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Ingredient>, AppError>;

    /// Inserts ingredients in bulk, skipping rows that collide with an
    /// existing (name, unit) pair. Returns the number of rows actually
    /// inserted.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn bulk_import(&self, ingredients: &[NewIngredient]) -> Result<u64, AppError>;
}
