//! Data-access traits the services depend on.
//!
//! Each trait is a narrow contract over one aggregate; the Postgres
//! implementations live in `crate::infrastructure::persistence`, and
//! mockall doubles are generated under `cfg(test)` so services unit-test
//! without a database.

pub mod cart_repository;
pub mod favorite_repository;
pub mod ingredient_repository;
pub mod recipe_repository;
pub mod subscription_repository;
pub mod tag_repository;
pub mod token_repository;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use favorite_repository::FavoriteRepository;
pub use ingredient_repository::IngredientRepository;
pub use recipe_repository::{RecipeFilter, RecipeRepository};
pub use subscription_repository::SubscriptionRepository;
pub use tag_repository::TagRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use subscription_repository::MockSubscriptionRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
