//! Per-user recipe favorites.

use std::sync::Arc;

use crate::domain::entities::{Recipe, RecipeSummary};
use crate::domain::repositories::{FavoriteRepository, RecipeRepository};
use crate::error::AppError;
use serde_json::json;

/// Service maintaining the (user, recipe) favorites relation.
pub struct FavoriteService<F: FavoriteRepository, R: RecipeRepository> {
    favorite_repository: Arc<F>,
    recipe_repository: Arc<R>,
}

impl<F: FavoriteRepository, R: RecipeRepository> FavoriteService<F, R> {
    /// Creates a new favorite service.
    pub fn new(favorite_repository: Arc<F>, recipe_repository: Arc<R>) -> Self {
        Self {
            favorite_repository,
            recipe_repository,
        }
    }

    /// Adds a recipe to the user's favorites, returning a compact card
    /// of the favorited recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if it is already favorited.
    pub async fn add_favorite(
        &self,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<RecipeSummary, AppError> {
        let recipe = self.require_recipe(recipe_id).await?;

        if !self.favorite_repository.add(user_id, recipe_id).await? {
            return Err(AppError::bad_request(
                "Recipe is already in favorites",
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(summary_of(&recipe))
    }

    /// Removes a recipe from the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe was not favorited.
    pub async fn remove_favorite(&self, user_id: i64, recipe_id: i64) -> Result<(), AppError> {
        if !self.favorite_repository.remove(user_id, recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe is not in favorites",
                json!({ "recipe_id": recipe_id }),
            ));
        }
        Ok(())
    }

    /// Of the given recipe ids, returns those the user has favorited.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn filter_favorited(
        &self,
        user_id: i64,
        recipe_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        self.favorite_repository
            .filter_favorited(user_id, recipe_ids)
            .await
    }

    async fn require_recipe(&self, recipe_id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))
    }
}

fn summary_of(recipe: &Recipe) -> RecipeSummary {
    RecipeSummary {
        id: recipe.id,
        name: recipe.name.clone(),
        image: recipe.image.clone(),
        cooking_time: recipe.cooking_time,
    }
}
