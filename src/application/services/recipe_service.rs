//! Recipe authoring, retrieval and listing.

use std::collections::HashSet;
use std::sync::Arc;

use crate::constants::{
    MAX_COOKING_TIME, MAX_INGREDIENT_AMOUNT, MIN_COOKING_TIME, MIN_INGREDIENT_AMOUNT,
};
use crate::domain::entities::{NewRecipe, Recipe, RecipeDraft, RecipeIngredientDetail, Tag};
use crate::domain::repositories::{
    IngredientRepository, RecipeFilter, RecipeRepository, TagRepository,
};
use crate::error::AppError;
use crate::utils::short_code::generate_short_code;
use serde_json::json;

/// Service for creating, updating and listing recipes.
///
/// Enforces the business rules a draft must satisfy before it reaches
/// the database: amount and cooking-time bounds, non-empty ingredient
/// and tag sets without duplicates, and references that exist in the
/// catalogs. Only the author may modify or delete a recipe.
pub struct RecipeService<R: RecipeRepository, T: TagRepository, I: IngredientRepository> {
    recipe_repository: Arc<R>,
    tag_repository: Arc<T>,
    ingredient_repository: Arc<I>,
}

impl<R: RecipeRepository, T: TagRepository, I: IngredientRepository> RecipeService<R, T, I> {
    /// Creates a new recipe service.
    pub fn new(
        recipe_repository: Arc<R>,
        tag_repository: Arc<T>,
        ingredient_repository: Arc<I>,
    ) -> Self {
        Self {
            recipe_repository,
            tag_repository,
            ingredient_repository,
        }
    }

    /// Creates a recipe for `author_id`, minting its permanent short-link
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the draft violates a
    /// business rule or references unknown tags/ingredients.
    /// Returns [`AppError::Conflict`] when the author already has a
    /// recipe with the same name.
    pub async fn create_recipe(
        &self,
        author_id: i64,
        draft: RecipeDraft,
    ) -> Result<Recipe, AppError> {
        validate_draft(&draft)?;
        self.ensure_references(&draft).await?;

        let short_code = self.generate_unique_short_code().await?;

        let new_recipe = NewRecipe {
            author_id,
            name: draft.name,
            instructions: draft.instructions,
            image: draft.image,
            cooking_time: draft.cooking_time,
            short_code,
            ingredients: draft.ingredients,
            tag_ids: draft.tag_ids,
        };

        self.recipe_repository.create(new_recipe).await
    }

    /// Replaces the editable fields of a recipe, including its whole
    /// ingredient and tag sets. The short-link code is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist,
    /// [`AppError::Forbidden`] if `actor_id` is not the author, and
    /// [`AppError::Validation`] on business rule violations.
    pub async fn update_recipe(
        &self,
        actor_id: i64,
        recipe_id: i64,
        draft: RecipeDraft,
    ) -> Result<Recipe, AppError> {
        let recipe = self.get_recipe(recipe_id).await?;
        ensure_author(&recipe, actor_id)?;

        validate_draft(&draft)?;
        self.ensure_references(&draft).await?;

        self.recipe_repository.update(recipe_id, draft).await
    }

    /// Deletes a recipe, returning the deleted record so the caller can
    /// drop derived state such as cached short-link entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist and
    /// [`AppError::Forbidden`] if `actor_id` is not the author.
    pub async fn delete_recipe(&self, actor_id: i64, recipe_id: i64) -> Result<Recipe, AppError> {
        let recipe = self.get_recipe(recipe_id).await?;
        ensure_author(&recipe, actor_id)?;

        if !self.recipe_repository.delete(recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe not found",
                json!({ "id": recipe_id }),
            ));
        }

        Ok(recipe)
    }

    /// Retrieves a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no recipe has the given id.
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": id })))
    }

    /// Lists recipes newest-first with the given filters, returning one
    /// page plus the total match count.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn list_recipes(
        &self,
        filter: &RecipeFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Recipe>, i64), AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let recipes = self
            .recipe_repository
            .list(filter, offset, i64::from(page_size))
            .await?;
        let total = self.recipe_repository.count(filter).await?;

        Ok((recipes, total))
    }

    /// Ingredient lines for a batch of recipes, as (recipe_id, detail)
    /// pairs.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn ingredients_for(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<(i64, RecipeIngredientDetail)>, AppError> {
        self.recipe_repository.ingredients_for(recipe_ids).await
    }

    /// Tags for a batch of recipes, as (recipe_id, tag) pairs.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn tags_for(&self, recipe_ids: &[i64]) -> Result<Vec<(i64, Tag)>, AppError> {
        self.recipe_repository.tags_for(recipe_ids).await
    }

    /// Verifies that every tag and ingredient in the draft exists.
    async fn ensure_references(&self, draft: &RecipeDraft) -> Result<(), AppError> {
        let tags = self.tag_repository.find_by_ids(&draft.tag_ids).await?;
        if tags.len() != draft.tag_ids.len() {
            let found: HashSet<i64> = tags.iter().map(|t| t.id).collect();
            let missing: Vec<i64> = draft
                .tag_ids
                .iter()
                .copied()
                .filter(|id| !found.contains(id))
                .collect();
            return Err(AppError::bad_request(
                "Unknown tags",
                json!({ "missing_ids": missing }),
            ));
        }

        let ingredient_ids: Vec<i64> = draft.ingredients.iter().map(|i| i.ingredient_id).collect();
        let ingredients = self
            .ingredient_repository
            .find_by_ids(&ingredient_ids)
            .await?;
        if ingredients.len() != ingredient_ids.len() {
            let found: HashSet<i64> = ingredients.iter().map(|i| i.id).collect();
            let missing: Vec<i64> = ingredient_ids
                .iter()
                .copied()
                .filter(|id| !found.contains(id))
                .collect();
            return Err(AppError::bad_request(
                "Unknown ingredients",
                json!({ "missing_ids": missing }),
            ));
        }

        Ok(())
    }

    /// Generates a unique short-link code with collision retry.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_short_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_short_code();

            if self
                .recipe_repository
                .find_by_short_code(&code)
                .await?
                .is_none()
            {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short link code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

fn ensure_author(recipe: &Recipe, actor_id: i64) -> Result<(), AppError> {
    if recipe.author_id != Some(actor_id) {
        return Err(AppError::forbidden(
            "Only the author can modify this recipe",
            json!({ "recipe_id": recipe.id }),
        ));
    }
    Ok(())
}

fn validate_draft(draft: &RecipeDraft) -> Result<(), AppError> {
    if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&draft.cooking_time) {
        return Err(AppError::bad_request(
            "Cooking time is out of range",
            json!({
                "cooking_time": draft.cooking_time,
                "min": MIN_COOKING_TIME,
                "max": MAX_COOKING_TIME,
            }),
        ));
    }

    if draft.ingredients.is_empty() {
        return Err(AppError::bad_request(
            "At least one ingredient is required",
            json!({}),
        ));
    }

    if draft.tag_ids.is_empty() {
        return Err(AppError::bad_request(
            "At least one tag is required",
            json!({}),
        ));
    }

    for item in &draft.ingredients {
        if !(MIN_INGREDIENT_AMOUNT..=MAX_INGREDIENT_AMOUNT).contains(&item.amount) {
            return Err(AppError::bad_request(
                "Ingredient amount is out of range",
                json!({
                    "ingredient_id": item.ingredient_id,
                    "amount": item.amount,
                    "min": MIN_INGREDIENT_AMOUNT,
                    "max": MAX_INGREDIENT_AMOUNT,
                }),
            ));
        }
    }

    let mut seen_ingredients = HashSet::new();
    for item in &draft.ingredients {
        if !seen_ingredients.insert(item.ingredient_id) {
            return Err(AppError::bad_request(
                "Duplicate ingredients are not allowed",
                json!({ "ingredient_id": item.ingredient_id }),
            ));
        }
    }

    let mut seen_tags = HashSet::new();
    for tag_id in &draft.tag_ids {
        if !seen_tags.insert(*tag_id) {
            return Err(AppError::bad_request(
                "Duplicate tags are not allowed",
                json!({ "tag_id": tag_id }),
            ));
        }
    }

    Ok(())
}
