//! Business logic services for the application layer.

pub mod auth_service;
pub mod catalog_service;
pub mod favorite_service;
pub mod recipe_service;
pub mod shopping_list_service;
pub mod short_link_service;
pub mod subscription_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use favorite_service::FavoriteService;
pub use recipe_service::RecipeService;
pub use shopping_list_service::ShoppingListService;
pub use short_link_service::ShortLinkService;
pub use subscription_service::SubscriptionService;
