//! Handlers for user profile endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::user::UserProfile;
use crate::api::middleware::auth::{CurrentUser, MaybeUser};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

pub(super) fn user_to_profile(user: &User, is_subscribed: bool) -> UserProfile {
    UserProfile {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        is_subscribed,
        avatar: user.avatar.clone(),
    }
}

/// Returns the calling user's own profile.
///
/// # Endpoint
///
/// `GET /api/users/me`
///
/// `is_subscribed` is always false here; users cannot follow themselves.
pub async fn me_handler(CurrentUser(user): CurrentUser) -> Json<UserProfile> {
    Json(user_to_profile(&user, false))
}

/// Retrieves a user profile.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// `is_subscribed` reflects whether the calling user follows this
/// profile; false for anonymous callers.
///
/// # Errors
///
/// Returns 404 if no user has the given id.
pub async fn user_detail_handler(
    Path(id): Path<i64>,
    MaybeUser(viewer): MaybeUser,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, AppError> {
    let user = state.subscription_service.get_user(id).await?;

    let is_subscribed = match &viewer {
        Some(viewer) if viewer.id != user.id => {
            state
                .subscription_service
                .is_subscribed(viewer.id, user.id)
                .await?
        }
        _ => false,
    };

    Ok(Json(user_to_profile(&user, is_subscribed)))
}
