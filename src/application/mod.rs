//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::recipe_service::RecipeService`] - Recipe authoring and listing
//! - [`services::catalog_service::CatalogService`] - Tag and ingredient catalogs
//! - [`services::favorite_service::FavoriteService`] - Per-user favorites
//! - [`services::shopping_list_service::ShoppingListService`] - Cart and list assembly
//! - [`services::short_link_service::ShortLinkService`] - Short link resolution
//! - [`services::subscription_service::SubscriptionService`] - Author subscriptions
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
