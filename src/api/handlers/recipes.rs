//! Handlers for recipe CRUD and listing endpoints.

use std::collections::{HashMap, HashSet};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::api::dto::recipe::{
    RecipeCard, RecipeDetail, RecipeIngredientLine, RecipeListParams, RecipeListResponse,
    RecipeRequest,
};
use crate::api::middleware::auth::{CurrentUser, MaybeUser};
use crate::domain::entities::{Recipe, RecipeSummary, User};
use crate::domain::repositories::RecipeFilter;
use crate::error::AppError;
use crate::state::AppState;

use super::tags::tag_to_item;
use super::users::user_to_profile;

pub(super) fn summary_to_card(summary: RecipeSummary) -> RecipeCard {
    RecipeCard {
        id: summary.id,
        name: summary.name,
        image: summary.image,
        cooking_time: summary.cooking_time,
    }
}

/// Assembles full recipe representations for a page of recipes.
///
/// Tags, ingredient lines, author profiles, and the per-viewer
/// favorited/in-cart/subscribed flags are each fetched once for the
/// whole batch, not per recipe.
pub(super) async fn build_recipe_details(
    state: &AppState,
    recipes: Vec<Recipe>,
    viewer: Option<&User>,
) -> Result<Vec<RecipeDetail>, AppError> {
    let recipe_ids: Vec<i64> = recipes.iter().map(|recipe| recipe.id).collect();
    let author_ids: Vec<i64> = recipes
        .iter()
        .filter_map(|recipe| recipe.author_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let (tag_pairs, ingredient_pairs, authors) = tokio::try_join!(
        state.recipe_service.tags_for(&recipe_ids),
        state.recipe_service.ingredients_for(&recipe_ids),
        state.subscription_service.users_by_ids(&author_ids),
    )?;

    let (favorited, in_cart, subscribed) = match viewer {
        Some(user) => {
            let (favorited, in_cart, subscribed) = tokio::try_join!(
                state.favorite_service.filter_favorited(user.id, &recipe_ids),
                state
                    .shopping_list_service
                    .filter_in_cart(user.id, &recipe_ids),
                state
                    .subscription_service
                    .filter_subscribed(user.id, &author_ids),
            )?;
            (
                favorited.into_iter().collect::<HashSet<_>>(),
                in_cart.into_iter().collect::<HashSet<_>>(),
                subscribed.into_iter().collect::<HashSet<_>>(),
            )
        }
        None => (HashSet::new(), HashSet::new(), HashSet::new()),
    };

    let mut tags_by_recipe: HashMap<i64, Vec<_>> = HashMap::new();
    for (recipe_id, tag) in tag_pairs {
        tags_by_recipe
            .entry(recipe_id)
            .or_default()
            .push(tag_to_item(tag));
    }

    let mut ingredients_by_recipe: HashMap<i64, Vec<_>> = HashMap::new();
    for (recipe_id, detail) in ingredient_pairs {
        ingredients_by_recipe
            .entry(recipe_id)
            .or_default()
            .push(RecipeIngredientLine {
                id: detail.ingredient_id,
                name: detail.name,
                measurement_unit: detail.measurement_unit,
                amount: detail.amount,
            });
    }

    let authors_by_id: HashMap<i64, User> =
        authors.into_iter().map(|user| (user.id, user)).collect();

    let details = recipes
        .into_iter()
        .map(|recipe| {
            let author = recipe
                .author_id
                .and_then(|id| authors_by_id.get(&id))
                .map(|user| user_to_profile(user, subscribed.contains(&user.id)));

            RecipeDetail {
                id: recipe.id,
                tags: tags_by_recipe.remove(&recipe.id).unwrap_or_default(),
                author,
                ingredients: ingredients_by_recipe.remove(&recipe.id).unwrap_or_default(),
                is_favorited: favorited.contains(&recipe.id),
                is_in_shopping_cart: in_cart.contains(&recipe.id),
                name: recipe.name,
                image: recipe.image,
                instructions: recipe.instructions,
                cooking_time: recipe.cooking_time,
            }
        })
        .collect();

    Ok(details)
}

async fn build_one(
    state: &AppState,
    recipe: Recipe,
    viewer: Option<&User>,
) -> Result<RecipeDetail, AppError> {
    let mut details = build_recipe_details(state, vec![recipe], viewer).await?;

    details
        .pop()
        .ok_or_else(|| AppError::internal("Recipe assembly produced no item", json!({})))
}

/// Lists recipes newest-first with filters and pagination.
///
/// # Endpoint
///
/// `GET /api/recipes?page=1&limit=10&author=2&tags=breakfast,lunch&is_favorited=1`
///
/// The favorited/in-cart filters apply relative to the calling user and
/// are ignored for anonymous requests.
///
/// # Errors
///
/// Returns 400 on invalid pagination parameters.
pub async fn recipe_list_handler(
    Query(params): Query<RecipeListParams>,
    MaybeUser(viewer): MaybeUser,
    State(state): State<AppState>,
) -> Result<Json<RecipeListResponse>, AppError> {
    let (page, limit) = params
        .pagination
        .resolve()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let mut filter = RecipeFilter {
        author_id: params.author,
        tag_slugs: params.tag_slugs(),
        ..RecipeFilter::default()
    };

    if let Some(user) = &viewer {
        if params.favorited_only() {
            filter.favorited_by = Some(user.id);
        }
        if params.in_cart_only() {
            filter.in_cart_of = Some(user.id);
        }
    }

    let (recipes, total_items) = state
        .recipe_service
        .list_recipes(&filter, page, limit)
        .await?;
    let items = build_recipe_details(&state, recipes, viewer.as_ref()).await?;

    Ok(Json(RecipeListResponse {
        pagination: PaginationMeta::new(page, limit, total_items),
        items,
    }))
}

/// Retrieves one recipe.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}`
///
/// # Errors
///
/// Returns 404 if no recipe has the given id.
pub async fn recipe_detail_handler(
    Path(id): Path<i64>,
    MaybeUser(viewer): MaybeUser,
    State(state): State<AppState>,
) -> Result<Json<RecipeDetail>, AppError> {
    let recipe = state.recipe_service.get_recipe(id).await?;

    Ok(Json(build_one(&state, recipe, viewer.as_ref()).await?))
}

/// Creates a recipe authored by the calling user.
///
/// # Endpoint
///
/// `POST /api/recipes`
///
/// # Errors
///
/// Returns 400 on validation failures (bounds, duplicate or unknown
/// tag/ingredient references).
/// Returns 409 if the author already has a recipe with the same name.
pub async fn create_recipe_handler(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeDetail>), AppError> {
    payload.validate()?;

    let recipe = state
        .recipe_service
        .create_recipe(user.id, payload.into_draft())
        .await?;
    let detail = build_one(&state, recipe, Some(&user)).await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Edits a recipe; only its author may do so.
///
/// # Endpoint
///
/// `PATCH /api/recipes/{id}`
///
/// Ingredient and tag sets are replaced wholesale.
///
/// # Errors
///
/// Returns 400 on validation failures.
/// Returns 403 if the caller is not the author.
/// Returns 404 if no recipe has the given id.
pub async fn update_recipe_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<RecipeRequest>,
) -> Result<Json<RecipeDetail>, AppError> {
    payload.validate()?;

    let recipe = state
        .recipe_service
        .update_recipe(user.id, id, payload.into_draft())
        .await?;
    let detail = build_one(&state, recipe, Some(&user)).await?;

    Ok(Json(detail))
}

/// Deletes a recipe; only its author may do so.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}`
///
/// Drops the recipe's short-link cache entry so the freed code cannot
/// redirect to a dead page.
///
/// # Errors
///
/// Returns 403 if the caller is not the author.
/// Returns 404 if no recipe has the given id.
pub async fn delete_recipe_handler(
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.recipe_service.delete_recipe(user.id, id).await?;

    state.short_link_service.invalidate(&deleted.short_code).await;

    Ok(StatusCode::NO_CONTENT)
}
