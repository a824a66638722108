//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic, independent of the
//! persistence layer.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user
//! - [`Tag`] - A recipe tag
//! - [`Ingredient`] - A catalog ingredient with a measurement unit
//! - [`Recipe`] - A published recipe with its short-link code
//! - [`ShoppingList`] - An aggregated cart document
//!
//! Creation inputs follow the `New*` pattern (`NewUser`, `NewRecipe`,
//! ...); `RecipeDraft` carries the author-editable recipe fields.

pub mod ingredient;
pub mod recipe;
pub mod shopping_list;
pub mod tag;
pub mod user;

pub use ingredient::{Ingredient, NewIngredient};
pub use recipe::{
    IngredientAmount, NewRecipe, Recipe, RecipeDraft, RecipeIngredientDetail, RecipeSummary,
};
pub use shopping_list::{ShoppingList, ShoppingListItem};
pub use tag::{NewTag, Tag};
pub use user::{NewUser, User};
