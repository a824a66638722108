//! Recipe storage.

use crate::domain::entities::{
    NewRecipe, Recipe, RecipeDraft, RecipeIngredientDetail, RecipeSummary, Tag,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Filters applied to recipe listings.
///
/// `tag_slugs` uses OR semantics: a recipe matches when it carries any of
/// the slugs, and appears once regardless of how many match.
/// `favorited_by`/`in_cart_of` narrow to recipes in that user's favorites
/// or shopping cart.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author_id: Option<i64>,
    pub tag_slugs: Vec<String>,
    pub favorited_by: Option<i64>,
    pub in_cart_of: Option<i64>,
}

/// Storage for recipes and their join rows.
///
/// Creation and update are transactional over the recipe row plus its
/// ingredient and tag join rows; update replaces both sets wholesale.
///
/// Implemented by
/// [`crate::infrastructure::persistence::PgRecipeRepository`]; a mockall
/// double is generated under `cfg(test)`, and `tests/repository_recipe.rs`
/// exercises the real queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Creates a recipe with its ingredient amounts and tag assignments
    /// in a single transaction.
    ///
    /// # Errors
    ///
    /// [`AppError::Conflict`] when the (author, name) pair or the short
    /// code already exists; database failures surface as
    /// [`AppError::Internal`].
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError>;

    /// Updates a recipe, clearing and re-inserting its ingredient and
    /// tag join rows in the same transaction.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when the recipe does not exist,
    /// [`AppError::Conflict`] on an (author, name) collision; database
    /// failures surface as [`AppError::Internal`].
    async fn update(&self, id: i64, draft: RecipeDraft) -> Result<Recipe, AppError>;

    /// Deletes a recipe; join rows, cart entries, and favorites cascade.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds a recipe by id.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError>;

    /// Finds a recipe by its short-link code.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Recipe>, AppError>;

    /// Lists recipes newest-first with filters and pagination.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn list(
        &self,
        filter: &RecipeFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError>;

    /// Counts recipes matching the filter.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, AppError>;

    /// Fetches ingredient lines for a batch of recipes, as (recipe_id,
    /// detail) pairs.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn ingredients_for(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<(i64, RecipeIngredientDetail)>, AppError>;

    /// Fetches tags for a batch of recipes, as (recipe_id, tag) pairs.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn tags_for(&self, recipe_ids: &[i64]) -> Result<Vec<(i64, Tag)>, AppError>;

    /// Newest recipes of one author as compact cards, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn summaries_by_author(
        &self,
        author_id: i64,
        limit: i64,
    ) -> Result<Vec<RecipeSummary>, AppError>;

    /// Counts recipes of one author.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn count_by_author(&self, author_id: i64) -> Result<i64, AppError>;
}
