//! DTOs for the tag catalog.

use serde::Serialize;

/// Individual tag information.
#[derive(Debug, Serialize)]
pub struct TagItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Response containing the full tag catalog.
#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub items: Vec<TagItem>,
}
