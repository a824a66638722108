//! Handlers for the shopping cart and its document download.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::recipe::RecipeCard;
use crate::api::dto::shopping_cart::{DocumentFormat, DownloadParams};
use crate::api::middleware::auth::CurrentUser;
use crate::constants::{PDF_FILENAME, TXT_FILENAME};
use crate::error::AppError;
use crate::infrastructure::rendering::{pdf, text};
use crate::state::AppState;

use super::recipes::summary_to_card;

/// Adds a recipe to the calling user's shopping cart.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 400 if the recipe is already in the cart.
/// Returns 404 if no recipe has the given id.
pub async fn cart_add_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<RecipeCard>), AppError> {
    let summary = state.shopping_list_service.add_to_cart(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(summary_to_card(summary))))
}

/// Removes a recipe from the calling user's shopping cart.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 404 if the recipe is not in the cart.
pub async fn cart_remove_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .shopping_list_service
        .remove_from_cart(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Downloads the aggregated shopping list as a file attachment.
///
/// # Endpoint
///
/// `GET /api/recipes/download_shopping_cart?format=txt|pdf`
///
/// Ingredient amounts are summed per (name, unit) across every recipe
/// in the cart. An empty cart yields an empty document, not an error.
///
/// # Errors
///
/// Returns 500 if PDF generation fails.
pub async fn download_shopping_cart_handler(
    Query(params): Query<DownloadParams>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let list = state.shopping_list_service.build_list(user.id).await?;

    let response = match params.format {
        DocumentFormat::Txt => {
            metrics::counter!("shopping_list_downloads_total", "format" => "txt").increment(1);

            (
                [
                    (
                        header::CONTENT_TYPE,
                        "text/plain; charset=utf-8".to_string(),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{TXT_FILENAME}\""),
                    ),
                ],
                text::render(&list),
            )
                .into_response()
        }
        DocumentFormat::Pdf => {
            metrics::counter!("shopping_list_downloads_total", "format" => "pdf").increment(1);

            let bytes = pdf::render(&list, state.shopping_list_font.as_deref())?;

            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{PDF_FILENAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
    };

    Ok(response)
}
