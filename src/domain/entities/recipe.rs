//! Recipe entity and its creation/update inputs.

use chrono::{DateTime, Utc};

/// A published recipe.
///
/// `author_id` is `None` when the author account was deleted; the recipe
/// itself survives. `short_code` is minted once at creation and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub author_id: Option<i64>,
    pub name: String,
    pub instructions: String,
    pub image: String,
    pub cooking_time: i32,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new Recipe instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        author_id: Option<i64>,
        name: String,
        instructions: String,
        image: String,
        cooking_time: i32,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            name,
            instructions,
            image,
            cooking_time,
            short_code,
            created_at,
        }
    }

    /// Path of the recipe's canonical detail page, the redirect target
    /// for its short link.
    pub fn canonical_path(&self) -> String {
        Self::canonical_path_for(self.id)
    }

    /// Canonical detail page path for a recipe id, for callers that only
    /// hold the id (cache hits).
    pub fn canonical_path_for(id: i64) -> String {
        format!("/recipes/{id}")
    }
}

/// Compact recipe card used by favorite/cart responses and subscription
/// previews.
#[derive(Debug, Clone)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// One ingredient line of a stored recipe, joined with catalog data.
#[derive(Debug, Clone)]
pub struct RecipeIngredientDetail {
    pub ingredient_id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// One (ingredient, amount) reference in a creation or update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientAmount {
    pub ingredient_id: i64,
    pub amount: i32,
}

/// Input data for creating a recipe.
///
/// The recipe row and its ingredient/tag join rows are persisted in one
/// transaction.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub author_id: i64,
    pub name: String,
    pub instructions: String,
    pub image: String,
    pub cooking_time: i32,
    pub short_code: String,
    pub ingredients: Vec<IngredientAmount>,
    pub tag_ids: Vec<i64>,
}

/// The author-editable fields of a recipe, shared by creation and
/// update requests.
///
/// On update, ingredient and tag sets are replaced wholesale; there is
/// no partial diffing of join rows.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub instructions: String,
    pub image: String,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientAmount>,
    pub tag_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new(
            7,
            Some(1),
            "Borscht".to_string(),
            "Simmer, then serve.".to_string(),
            "/media/recipes/7.png".to_string(),
            90,
            "aB3dE5fG".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_recipe_creation() {
        let recipe = sample_recipe();

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.author_id, Some(1));
        assert_eq!(recipe.cooking_time, 90);
        assert_eq!(recipe.short_code, "aB3dE5fG");
    }

    #[test]
    fn test_canonical_path() {
        assert_eq!(sample_recipe().canonical_path(), "/recipes/7");
    }

    #[test]
    fn test_new_recipe_creation() {
        let new_recipe = NewRecipe {
            author_id: 1,
            name: "Pancakes".to_string(),
            instructions: "Mix and fry.".to_string(),
            image: "/media/recipes/p.png".to_string(),
            cooking_time: 20,
            short_code: "xYz12345".to_string(),
            ingredients: vec![IngredientAmount {
                ingredient_id: 3,
                amount: 2,
            }],
            tag_ids: vec![1],
        };

        assert_eq!(new_recipe.ingredients.len(), 1);
        assert_eq!(new_recipe.ingredients[0].amount, 2);
        assert_eq!(new_recipe.tag_ids, vec![1]);
    }
}
