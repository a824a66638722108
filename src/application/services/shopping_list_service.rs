//! Shopping cart maintenance and shopping list assembly.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Recipe, RecipeSummary, ShoppingList};
use crate::domain::repositories::{CartRepository, RecipeRepository};
use crate::error::AppError;
use serde_json::json;

/// Service maintaining the shopping cart and building the aggregated
/// shopping list document from it.
pub struct ShoppingListService<C: CartRepository, R: RecipeRepository> {
    cart_repository: Arc<C>,
    recipe_repository: Arc<R>,
}

impl<C: CartRepository, R: RecipeRepository> ShoppingListService<C, R> {
    /// Creates a new shopping list service.
    pub fn new(cart_repository: Arc<C>, recipe_repository: Arc<R>) -> Self {
        Self {
            cart_repository,
            recipe_repository,
        }
    }

    /// Adds a recipe to the user's cart, returning a compact card of
    /// the added recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if it is already in the cart.
    pub async fn add_to_cart(
        &self,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<RecipeSummary, AppError> {
        let recipe = self.require_recipe(recipe_id).await?;

        if !self.cart_repository.add(user_id, recipe_id).await? {
            return Err(AppError::bad_request(
                "Recipe is already in the shopping cart",
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(RecipeSummary {
            id: recipe.id,
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        })
    }

    /// Removes a recipe from the user's cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe was not in the cart.
    pub async fn remove_from_cart(&self, user_id: i64, recipe_id: i64) -> Result<(), AppError> {
        if !self.cart_repository.remove(user_id, recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe is not in the shopping cart",
                json!({ "recipe_id": recipe_id }),
            ));
        }
        Ok(())
    }

    /// Of the given recipe ids, returns those present in the user's cart.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn filter_in_cart(
        &self,
        user_id: i64,
        recipe_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        self.cart_repository
            .filter_in_cart(user_id, recipe_ids)
            .await
    }

    /// Builds the shopping list for the user's current cart, stamped
    /// with the generation time. An empty cart yields an empty document.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn build_list(&self, user_id: i64) -> Result<ShoppingList, AppError> {
        let recipes = self.cart_repository.recipe_names(user_id).await?;
        let items = self.cart_repository.aggregate_ingredients(user_id).await?;

        Ok(ShoppingList {
            generated_at: Utc::now(),
            recipes,
            items,
        })
    }

    async fn require_recipe(&self, recipe_id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShoppingListItem;
    use crate::domain::repositories::{MockCartRepository, MockRecipeRepository};

    fn sample_recipe(id: i64) -> Recipe {
        Recipe::new(
            id,
            Some(1),
            "Pancakes".to_string(),
            "Mix and fry.".to_string(),
            "/media/recipes/2.png".to_string(),
            20,
            "xYz12345".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_add_to_cart_success() {
        let mut mock_cart = MockCartRepository::new();
        let mut mock_recipes = MockRecipeRepository::new();

        mock_recipes
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_recipe(id))));
        mock_cart
            .expect_add()
            .withf(|user_id, recipe_id| *user_id == 5 && *recipe_id == 10)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ShoppingListService::new(Arc::new(mock_cart), Arc::new(mock_recipes));

        let card = service.add_to_cart(5, 10).await.unwrap();

        assert_eq!(card.name, "Pancakes");
    }

    #[tokio::test]
    async fn test_add_to_cart_duplicate() {
        let mut mock_cart = MockCartRepository::new();
        let mut mock_recipes = MockRecipeRepository::new();

        mock_recipes
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_recipe(id))));
        mock_cart.expect_add().times(1).returning(|_, _| Ok(false));

        let service = ShoppingListService::new(Arc::new(mock_cart), Arc::new(mock_recipes));

        let result = service.add_to_cart(5, 10).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_remove_from_cart_absent() {
        let mut mock_cart = MockCartRepository::new();
        let mock_recipes = MockRecipeRepository::new();

        mock_cart
            .expect_remove()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = ShoppingListService::new(Arc::new(mock_cart), Arc::new(mock_recipes));

        let result = service.remove_from_cart(5, 10).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_build_list_assembles_document() {
        let mut mock_cart = MockCartRepository::new();
        let mock_recipes = MockRecipeRepository::new();

        mock_cart
            .expect_recipe_names()
            .times(1)
            .returning(|_| Ok(vec!["Borscht".to_string(), "Pancakes".to_string()]));
        mock_cart.expect_aggregate_ingredients().times(1).returning(|_| {
            Ok(vec![ShoppingListItem {
                name: "flour".to_string(),
                measurement_unit: "g".to_string(),
                total_amount: 500,
            }])
        });

        let service = ShoppingListService::new(Arc::new(mock_cart), Arc::new(mock_recipes));

        let list = service.build_list(5).await.unwrap();

        assert_eq!(list.recipes.len(), 2);
        assert_eq!(list.items[0].total_amount, 500);
        assert!(!list.is_empty());
    }

    #[tokio::test]
    async fn test_build_list_empty_cart() {
        let mut mock_cart = MockCartRepository::new();
        let mock_recipes = MockRecipeRepository::new();

        mock_cart
            .expect_recipe_names()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_cart
            .expect_aggregate_ingredients()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ShoppingListService::new(Arc::new(mock_cart), Arc::new(mock_recipes));

        let list = service.build_list(5).await.unwrap();

        assert!(list.is_empty());
    }
}
