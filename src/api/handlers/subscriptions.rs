//! Handlers for user subscriptions.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::pagination::PaginationMeta;
use crate::api::dto::user::{
    PreviewParams, SubscriptionItem, SubscriptionListParams, SubscriptionListResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::constants::DEFAULT_RECIPES_PREVIEW;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

use super::recipes::summary_to_card;
use super::users::user_to_profile;

/// Builds the author card with a recipe preview. `is_subscribed` is
/// true by construction in every subscription context.
async fn build_subscription_item(
    state: &AppState,
    author: User,
    recipes_limit: i64,
) -> Result<SubscriptionItem, AppError> {
    let (summaries, recipes_count) = state
        .subscription_service
        .author_recipes(author.id, recipes_limit)
        .await?;

    Ok(SubscriptionItem {
        author: user_to_profile(&author, true),
        recipes: summaries.into_iter().map(summary_to_card).collect(),
        recipes_count,
    })
}

/// Lists the authors the calling user follows, oldest subscription
/// first, each with a preview of their newest recipes.
///
/// # Endpoint
///
/// `GET /api/users/subscriptions?page=1&limit=10&recipes_limit=3`
///
/// # Errors
///
/// Returns 400 on invalid pagination parameters.
pub async fn subscription_list_handler(
    Query(params): Query<SubscriptionListParams>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<SubscriptionListResponse>, AppError> {
    let (page, limit) = params
        .pagination
        .resolve()
        .map_err(|e| AppError::bad_request(e, json!({})))?;
    let recipes_limit = i64::from(params.recipes_limit.unwrap_or(DEFAULT_RECIPES_PREVIEW));

    let (authors, total_items) = state
        .subscription_service
        .subscriptions_page(user.id, page, limit)
        .await?;

    let mut items = Vec::with_capacity(authors.len());
    for author in authors {
        items.push(build_subscription_item(&state, author, recipes_limit).await?);
    }

    Ok(Json(SubscriptionListResponse {
        pagination: PaginationMeta::new(page, limit, total_items),
        items,
    }))
}

/// Subscribes the calling user to an author.
///
/// # Endpoint
///
/// `POST /api/users/{id}/subscribe?recipes_limit=3`
///
/// # Errors
///
/// Returns 400 on self-subscription or when already subscribed.
/// Returns 404 if no user has the given id.
pub async fn subscribe_handler(
    Path(id): Path<i64>,
    Query(params): Query<PreviewParams>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SubscriptionItem>), AppError> {
    let recipes_limit = i64::from(params.recipes_limit.unwrap_or(DEFAULT_RECIPES_PREVIEW));

    let author = state.subscription_service.subscribe(user.id, id).await?;
    let item = build_subscription_item(&state, author, recipes_limit).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Unsubscribes the calling user from an author.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}/subscribe`
///
/// # Errors
///
/// Returns 404 if the subscription does not exist.
pub async fn unsubscribe_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.subscription_service.unsubscribe(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
