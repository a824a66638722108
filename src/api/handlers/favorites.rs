//! Handlers for recipe favorites.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::recipe::RecipeCard;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

use super::recipes::summary_to_card;

/// Adds a recipe to the calling user's favorites.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/favorite`
///
/// # Errors
///
/// Returns 400 if the recipe is already favorited.
/// Returns 404 if no recipe has the given id.
pub async fn favorite_add_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<RecipeCard>), AppError> {
    let summary = state.favorite_service.add_favorite(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(summary_to_card(summary))))
}

/// Removes a recipe from the calling user's favorites.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/favorite`
///
/// # Errors
///
/// Returns 404 if the recipe is not in the user's favorites.
pub async fn favorite_remove_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.favorite_service.remove_favorite(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
