//! Handlers for the ingredient catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::ingredient::{IngredientItem, IngredientListParams, IngredientListResponse};
use crate::domain::entities::Ingredient;
use crate::error::AppError;
use crate::state::AppState;

fn ingredient_to_item(ingredient: Ingredient) -> IngredientItem {
    IngredientItem {
        id: ingredient.id,
        name: ingredient.name,
        measurement_unit: ingredient.measurement_unit,
    }
}

/// Lists ingredients, optionally filtered by a name substring.
///
/// # Endpoint
///
/// `GET /api/ingredients?name=flo`
///
/// The filter is case-insensitive and matches anywhere in the name.
pub async fn ingredient_list_handler(
    Query(params): Query<IngredientListParams>,
    State(state): State<AppState>,
) -> Result<Json<IngredientListResponse>, AppError> {
    let ingredients = state.catalog_service.list_ingredients(params.name).await?;

    Ok(Json(IngredientListResponse {
        items: ingredients.into_iter().map(ingredient_to_item).collect(),
    }))
}

/// Retrieves one ingredient.
///
/// # Endpoint
///
/// `GET /api/ingredients/{id}`
///
/// # Errors
///
/// Returns 404 if no ingredient has the given id.
pub async fn ingredient_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<IngredientItem>, AppError> {
    let ingredient = state.catalog_service.get_ingredient(id).await?;

    Ok(Json(ingredient_to_item(ingredient)))
}
