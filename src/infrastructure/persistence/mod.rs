//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! prepared statements with explicit row mapping.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User records
//! - [`PgTokenRepository`] - API token storage and validation
//! - [`PgTagRepository`] / [`PgIngredientRepository`] - Reference catalogs
//! - [`PgRecipeRepository`] - Recipes with transactional join rows
//! - [`PgFavoriteRepository`] - Per-user favorites
//! - [`PgCartRepository`] - Cart entries and ingredient aggregation
//! - [`PgSubscriptionRepository`] - User-follows-author relation

pub mod pg_cart_repository;
pub mod pg_favorite_repository;
pub mod pg_ingredient_repository;
pub mod pg_recipe_repository;
pub mod pg_subscription_repository;
pub mod pg_tag_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_cart_repository::PgCartRepository;
pub use pg_favorite_repository::PgFavoriteRepository;
pub use pg_ingredient_repository::PgIngredientRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_subscription_repository::PgSubscriptionRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
