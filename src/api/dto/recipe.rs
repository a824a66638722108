//! DTOs for recipe endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use super::pagination::{PaginationMeta, PaginationParams};
use super::tag::TagItem;
use super::user::UserProfile;
use crate::domain::entities::{IngredientAmount, RecipeDraft};

/// Request to create a recipe or fully edit an existing one.
///
/// Cross-field rules (duplicate references, existence of every tag and
/// ingredient) are enforced by the service layer on top of these checks.
#[derive(Debug, Deserialize, Validate)]
pub struct RecipeRequest {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(min = 1, max = 5000))]
    pub instructions: String,

    /// Media path of the recipe image.
    #[validate(length(min = 1, max = 500))]
    pub image: String,

    /// Cooking time in minutes.
    #[validate(range(min = 1, max = 300))]
    pub cooking_time: i32,

    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    #[validate(nested)]
    pub ingredients: Vec<IngredientRef>,

    /// Tag ids; the stored set is replaced wholesale on update.
    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Vec<i64>,
}

impl RecipeRequest {
    /// Converts the validated request into the service-layer input.
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft {
            name: self.name,
            instructions: self.instructions,
            image: self.image,
            cooking_time: self.cooking_time,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|item| IngredientAmount {
                    ingredient_id: item.id,
                    amount: item.amount,
                })
                .collect(),
            tag_ids: self.tags,
        }
    }
}

/// One ingredient reference inside a recipe request.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct IngredientRef {
    /// Catalog id of the ingredient.
    pub id: i64,

    /// Amount in the ingredient's measurement unit.
    #[validate(range(min = 1, max = 32))]
    pub amount: i32,
}

/// Query parameters for the recipe listing.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RecipeListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Restricts the listing to one author.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub author: Option<i64>,

    /// Comma-separated tag slugs, OR semantics.
    pub tags: Option<String>,

    /// When set, only recipes the caller has favorited.
    pub is_favorited: Option<String>,

    /// When set, only recipes in the caller's shopping cart.
    pub is_in_shopping_cart: Option<String>,
}

impl RecipeListParams {
    /// Tag slugs parsed out of the `tags` parameter, empty entries
    /// dropped.
    pub fn tag_slugs(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn favorited_only(&self) -> bool {
        flag_is_set(self.is_favorited.as_deref())
    }

    pub fn in_cart_only(&self) -> bool {
        flag_is_set(self.is_in_shopping_cart.as_deref())
    }
}

/// Query-string booleans arrive as `1` or `true`; anything else is off.
fn flag_is_set(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

/// Full recipe representation used by detail and list responses.
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub tags: Vec<TagItem>,
    pub author: Option<UserProfile>,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: String,
    pub instructions: String,
    pub cooking_time: i32,
}

/// One ingredient line of a recipe response.
#[derive(Debug, Serialize)]
pub struct RecipeIngredientLine {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// Compact recipe card returned by favorite/cart mutations and
/// subscription previews.
#[derive(Debug, Serialize)]
pub struct RecipeCard {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// Response containing one page of recipes.
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<RecipeDetail>,
}
