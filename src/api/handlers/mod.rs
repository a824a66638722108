//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod favorites;
pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod shopping_cart;
pub mod short_links;
pub mod subscriptions;
pub mod tags;
pub mod users;

pub use favorites::{favorite_add_handler, favorite_remove_handler};
pub use health::health_handler;
pub use ingredients::{ingredient_detail_handler, ingredient_list_handler};
pub use recipes::{
    create_recipe_handler, delete_recipe_handler, recipe_detail_handler, recipe_list_handler,
    update_recipe_handler,
};
pub use shopping_cart::{cart_add_handler, cart_remove_handler, download_shopping_cart_handler};
pub use short_links::{get_link_handler, redirect_handler};
pub use subscriptions::{subscribe_handler, subscription_list_handler, unsubscribe_handler};
pub use tags::{tag_detail_handler, tag_list_handler};
pub use users::{me_handler, user_detail_handler};
