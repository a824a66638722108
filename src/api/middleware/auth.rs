//! Bearer authentication middleware and the extractors behind it.
//!
//! [`require`] guards routes that need an account; [`identify`] lets
//! public routes personalize responses for callers who present a token.
//! Both attach [`AuthUser`] to the request extensions, which
//! [`CurrentUser`] and [`MaybeUser`] read back out in handlers.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::entities::User, error::AppError, state::AppState};

/// Authenticated user attached to the request extensions by [`require`]
/// or [`identify`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Rejects the request unless `Authorization: Bearer <token>` names a
/// live token; resolves the token's owner and attaches it as
/// [`AuthUser`] before running the inner service.
///
/// Applied with `middleware::from_fn_with_state` as a route layer on
/// the secured route group.
///
/// # Errors
///
/// `401` when the header is missing or malformed, and whatever the
/// authentication service raises for an unknown, revoked, or orphaned
/// token.
pub async fn require(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthUser(user));

    Ok(next.run(req).await)
}

/// Resolves the calling user when a token is supplied, without
/// requiring one.
///
/// Only a missing `Authorization` header counts as anonymous; a header
/// that is present must carry a valid token and fails with `401`
/// otherwise.
pub async fn identify(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.headers().contains_key(header::AUTHORIZATION) {
        require(State(st), req, next).await
    } else {
        Ok(next.run(req).await)
    }
}

/// Extractor for handlers behind [`require`], where a user is always
/// attached.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(|AuthUser(user)| CurrentUser(user))
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authentication required"}),
                )
            })
    }
}

/// Extractor for public handlers that personalize responses when the
/// request went through [`identify`].
pub struct MaybeUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(|AuthUser(user)| user);

        Ok(MaybeUser(user))
    }
}
