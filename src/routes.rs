//! Route table and middleware stack.
//!
//! Four surfaces hang off the root: `/s/{token}` short-link redirects,
//! `/health`, the `/api` tree (public reads carry optional identity,
//! writes require a Bearer token), and `/media` for uploaded recipe
//! images. Requests pass through request tracing, per-IP rate limits,
//! and trailing-slash normalization on the way in.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Assembles the full router.
///
/// With `behind_proxy` set, rate limiting trusts `X-Forwarded-For` /
/// `X-Real-IP` for the client address instead of the peer socket; only
/// enable it behind a reverse proxy that overwrites those headers.
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_public = rate_limit::layer(
        api::routes::public_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::identify)),
        behind_proxy,
    );

    let api_protected = rate_limit::secure_layer(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::require)),
        behind_proxy,
    );

    let api_router = Router::new().merge(api_protected).merge(api_public);

    let router = tracing::layer(
        Router::new()
            .route("/s/{token}", get(redirect_handler))
            .route("/health", get(health_handler))
            .nest("/api", api_router)
            .nest_service("/media", ServeDir::new(&state.media_root))
            .with_state(state),
    );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
