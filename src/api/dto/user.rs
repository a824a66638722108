//! DTOs for user profiles and subscriptions.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::pagination::{PaginationMeta, PaginationParams};
use super::recipe::RecipeCard;

/// A user profile; `is_subscribed` is relative to the calling user and
/// always false for anonymous callers.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub avatar: Option<String>,
}

/// A followed author with a preview of their newest recipes.
#[derive(Debug, Serialize)]
pub struct SubscriptionItem {
    #[serde(flatten)]
    pub author: UserProfile,
    pub recipes: Vec<RecipeCard>,
    pub recipes_count: i64,
}

/// Query parameters for the subscription listing.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SubscriptionListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Caps the per-author recipe preview.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub recipes_limit: Option<u32>,
}

/// Query parameters for the subscribe action, which returns the same
/// author card as the listing.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Caps the per-author recipe preview.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub recipes_limit: Option<u32>,
}

/// Response containing one page of followed authors.
#[derive(Debug, Serialize)]
pub struct SubscriptionListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<SubscriptionItem>,
}
