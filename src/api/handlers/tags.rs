//! Handlers for the tag catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::tag::{TagItem, TagListResponse};
use crate::domain::entities::Tag;
use crate::error::AppError;
use crate::state::AppState;

pub(super) fn tag_to_item(tag: Tag) -> TagItem {
    TagItem {
        id: tag.id,
        name: tag.name,
        slug: tag.slug,
    }
}

/// Lists all tags.
///
/// # Endpoint
///
/// `GET /api/tags`
pub async fn tag_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TagListResponse>, AppError> {
    let tags = state.catalog_service.list_tags().await?;

    Ok(Json(TagListResponse {
        items: tags.into_iter().map(tag_to_item).collect(),
    }))
}

/// Retrieves one tag.
///
/// # Endpoint
///
/// `GET /api/tags/{id}`
///
/// # Errors
///
/// Returns 404 if no tag has the given id.
pub async fn tag_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TagItem>, AppError> {
    let tag = state.catalog_service.get_tag(id).await?;

    Ok(Json(tag_to_item(tag)))
}
