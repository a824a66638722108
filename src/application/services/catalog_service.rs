//! Read-only access to the tag and ingredient catalogs.

use std::sync::Arc;

use crate::domain::entities::{Ingredient, Tag};
use crate::domain::repositories::{IngredientRepository, TagRepository};
use crate::error::AppError;
use serde_json::json;

/// Service exposing the tag and ingredient reference catalogs.
///
/// Catalog writes go through the operator CLI import commands, not this
/// service.
pub struct CatalogService<T: TagRepository, I: IngredientRepository> {
    tag_repository: Arc<T>,
    ingredient_repository: Arc<I>,
}

impl<T: TagRepository, I: IngredientRepository> CatalogService<T, I> {
    /// Creates a new catalog service.
    pub fn new(tag_repository: Arc<T>, ingredient_repository: Arc<I>) -> Self {
        Self {
            tag_repository,
            ingredient_repository,
        }
    }

    /// Lists all tags ordered by name.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tag_repository.list().await
    }

    /// Retrieves a single tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tag has the given id.
    pub async fn get_tag(&self, id: i64) -> Result<Tag, AppError> {
        self.tag_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }

    /// Lists ingredients, optionally narrowed by a case-insensitive
    /// substring match on the name.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn list_ingredients(
        &self,
        name_filter: Option<String>,
    ) -> Result<Vec<Ingredient>, AppError> {
        self.ingredient_repository.list(name_filter).await
    }

    /// Retrieves a single ingredient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ingredient has the given id.
    pub async fn get_ingredient(&self, id: i64) -> Result<Ingredient, AppError> {
        self.ingredient_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient not found", json!({ "id": id })))
    }
}
