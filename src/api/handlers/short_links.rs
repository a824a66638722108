//! Handlers for short link lookup and redirect.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::api::dto::short_link::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the absolute short URL for a recipe.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}/get-link`
///
/// The code behind the URL is minted once at recipe creation; this
/// lookup never changes it.
///
/// # Errors
///
/// Returns 404 if no recipe has the given id.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let short_link = state.short_link_service.link_for_recipe(id).await?;

    Ok(Json(ShortLinkResponse { short_link }))
}

/// Redirects a short link to the recipe's canonical page.
///
/// # Endpoint
///
/// `GET /s/{token}`
///
/// # Redirect Behavior
///
/// Issues `307 Temporary Redirect` to `/recipes/{id}`. Resolution hits
/// the cache first and falls back to the database.
///
/// # Errors
///
/// Returns 404 if the token is unknown.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.short_link_service.resolve(&token).await?;

    metrics::counter!("short_link_redirects_total").increment(1);

    Ok(Redirect::temporary(&target))
}
