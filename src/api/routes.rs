//! API route configuration.
//!
//! Routes are split by access level: public reads go through
//! identify-only authentication so responses can carry per-user flags,
//! while mutating and user-scoped routes require a valid Bearer token
//! via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    cart_add_handler, cart_remove_handler, create_recipe_handler, delete_recipe_handler,
    download_shopping_cart_handler, favorite_add_handler, favorite_remove_handler,
    get_link_handler, ingredient_detail_handler, ingredient_list_handler, me_handler,
    recipe_detail_handler, recipe_list_handler, subscribe_handler, subscription_list_handler,
    tag_detail_handler, tag_list_handler, unsubscribe_handler, update_recipe_handler,
    user_detail_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Publicly readable routes.
///
/// # Endpoints
///
/// - `GET /tags`                   - Full tag catalog
/// - `GET /tags/{id}`              - One tag
/// - `GET /ingredients`            - Ingredient catalog with name filter
/// - `GET /ingredients/{id}`       - One ingredient
/// - `GET /recipes`                - Paginated, filtered recipe listing
/// - `GET /recipes/{id}`           - One recipe
/// - `GET /recipes/{id}/get-link`  - Short URL for a recipe
/// - `GET /users/{id}`             - A user profile
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(tag_list_handler))
        .route("/tags/{id}", get(tag_detail_handler))
        .route("/ingredients", get(ingredient_list_handler))
        .route("/ingredients/{id}", get(ingredient_detail_handler))
        .route("/recipes", get(recipe_list_handler))
        .route("/recipes/{id}", get(recipe_detail_handler))
        .route("/recipes/{id}/get-link", get(get_link_handler))
        .route("/users/{id}", get(user_detail_handler))
}

/// Routes requiring Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /recipes`                        - Create a recipe
/// - `PATCH  /recipes/{id}`                   - Edit a recipe (author only)
/// - `DELETE /recipes/{id}`                   - Delete a recipe (author only)
/// - `POST   /recipes/{id}/favorite`          - Favorite a recipe
/// - `DELETE /recipes/{id}/favorite`          - Unfavorite a recipe
/// - `POST   /recipes/{id}/shopping_cart`     - Add a recipe to the cart
/// - `DELETE /recipes/{id}/shopping_cart`     - Remove a recipe from the cart
/// - `GET    /recipes/download_shopping_cart` - Aggregated shopping list file
/// - `GET    /users/me`                       - Caller's own profile
/// - `GET    /users/subscriptions`            - Followed authors with previews
/// - `POST   /users/{id}/subscribe`           - Follow an author
/// - `DELETE /users/{id}/subscribe`           - Unfollow an author
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe_handler))
        .route(
            "/recipes/{id}",
            patch(update_recipe_handler).delete(delete_recipe_handler),
        )
        .route(
            "/recipes/{id}/favorite",
            post(favorite_add_handler).delete(favorite_remove_handler),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(cart_add_handler).delete(cart_remove_handler),
        )
        .route(
            "/recipes/download_shopping_cart",
            get(download_shopping_cart_handler),
        )
        .route("/users/me", get(me_handler))
        .route("/users/subscriptions", get(subscription_list_handler))
        .route(
            "/users/{id}/subscribe",
            post(subscribe_handler).delete(unsubscribe_handler),
        )
}
