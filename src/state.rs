//! Shared application state handed to every handler.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{
    AuthService, CatalogService, FavoriteService, RecipeService, ShoppingListService,
    ShortLinkService, SubscriptionService,
};
use crate::config::Config;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgCartRepository, PgFavoriteRepository, PgIngredientRepository, PgRecipeRepository,
    PgSubscriptionRepository, PgTagRepository, PgTokenRepository, PgUserRepository,
};

/// Application state shared across all request handlers.
///
/// Services are wired over the PostgreSQL repositories once at startup;
/// cloning the state is cheap since every field is an `Arc` (or a small
/// path value).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgTokenRepository, PgUserRepository>>,
    pub catalog_service: Arc<CatalogService<PgTagRepository, PgIngredientRepository>>,
    pub recipe_service: Arc<RecipeService<PgRecipeRepository, PgTagRepository, PgIngredientRepository>>,
    pub favorite_service: Arc<FavoriteService<PgFavoriteRepository, PgRecipeRepository>>,
    pub shopping_list_service: Arc<ShoppingListService<PgCartRepository, PgRecipeRepository>>,
    pub short_link_service: Arc<ShortLinkService<PgRecipeRepository>>,
    pub subscription_service: Arc<SubscriptionService<PgSubscriptionRepository, PgUserRepository, PgRecipeRepository>>,
    /// Short-link cache, also probed by the health endpoint.
    pub cache: Arc<dyn CacheService>,
    /// Directory served under `/media`.
    pub media_root: PathBuf,
    /// Optional TTF font for PDF shopping lists.
    pub shopping_list_font: Option<PathBuf>,
}

impl AppState {
    /// Builds the full service graph over a connection pool and cache.
    pub fn new(pool: PgPool, cache: Arc<dyn CacheService>, config: &Config) -> Self {
        let pool = Arc::new(pool);

        let user_repository = Arc::new(PgUserRepository::new(Arc::clone(&pool)));
        let token_repository = Arc::new(PgTokenRepository::new(Arc::clone(&pool)));
        let tag_repository = Arc::new(PgTagRepository::new(Arc::clone(&pool)));
        let ingredient_repository = Arc::new(PgIngredientRepository::new(Arc::clone(&pool)));
        let recipe_repository = Arc::new(PgRecipeRepository::new(Arc::clone(&pool)));
        let favorite_repository = Arc::new(PgFavoriteRepository::new(Arc::clone(&pool)));
        let cart_repository = Arc::new(PgCartRepository::new(Arc::clone(&pool)));
        let subscription_repository = Arc::new(PgSubscriptionRepository::new(Arc::clone(&pool)));

        let auth_service = Arc::new(AuthService::new(
            token_repository,
            Arc::clone(&user_repository),
            config.auth_signing_secret.clone(),
        ));
        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&tag_repository),
            Arc::clone(&ingredient_repository),
        ));
        let recipe_service = Arc::new(RecipeService::new(
            Arc::clone(&recipe_repository),
            tag_repository,
            ingredient_repository,
        ));
        let favorite_service = Arc::new(FavoriteService::new(
            favorite_repository,
            Arc::clone(&recipe_repository),
        ));
        let shopping_list_service = Arc::new(ShoppingListService::new(
            cart_repository,
            Arc::clone(&recipe_repository),
        ));
        let short_link_service = Arc::new(ShortLinkService::new(
            Arc::clone(&recipe_repository),
            Arc::clone(&cache),
            config.base_url.clone(),
        ));
        let subscription_service = Arc::new(SubscriptionService::new(
            subscription_repository,
            user_repository,
            recipe_repository,
        ));

        Self {
            auth_service,
            catalog_service,
            recipe_service,
            favorite_service,
            shopping_list_service,
            short_link_service,
            subscription_service,
            cache,
            media_root: config.media_root.clone(),
            shopping_list_font: config.shopping_list_font.clone(),
        }
    }
}
