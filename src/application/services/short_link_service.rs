//! Short link construction and resolution.

use std::sync::Arc;

use tracing::{debug, error};

use crate::constants::SHORT_LINK_PATH;
use crate::domain::entities::Recipe;
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use serde_json::json;

/// Service resolving short-link tokens to recipe pages and building the
/// public short URL for a recipe.
///
/// Resolution is cache-first: a hit answers without touching the
/// database, a miss falls back to the database and backfills the cache
/// asynchronously, and a cache error degrades to a plain database
/// lookup.
pub struct ShortLinkService<R: RecipeRepository> {
    recipe_repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    base_url: String,
}

impl<R: RecipeRepository> ShortLinkService<R> {
    /// Creates a new short link service.
    ///
    /// `base_url` is the public origin short URLs are built on, e.g.
    /// `https://foodgram.example.org`.
    pub fn new(recipe_repository: Arc<R>, cache: Arc<dyn CacheService>, base_url: String) -> Self {
        Self {
            recipe_repository,
            cache,
            base_url,
        }
    }

    /// The public short URL for a token.
    pub fn short_url(&self, token: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            SHORT_LINK_PATH,
            token
        )
    }

    /// The public short URL for a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    pub async fn link_for_recipe(&self, recipe_id: i64) -> Result<String, AppError> {
        let recipe = self
            .recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))?;

        Ok(self.short_url(&recipe.short_code))
    }

    /// Resolves a short-link token to the recipe's canonical page path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no recipe owns the token.
    /// Database failures surface as [`AppError::Internal`].
    pub async fn resolve(&self, token: &str) -> Result<String, AppError> {
        match self.cache.get_recipe_id(token).await {
            Ok(Some(recipe_id)) => {
                debug!("Cache HIT for short link {}", token);
                return Ok(Recipe::canonical_path_for(recipe_id));
            }
            Ok(None) => {
                debug!("Cache MISS for short link {}", token);
            }
            Err(e) => {
                error!("Cache error: {}", e);
            }
        }

        let recipe = self
            .recipe_repository
            .find_by_short_code(token)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "token": token }))
            })?;

        // Asynchronously update cache (fire-and-forget)
        let cache = self.cache.clone();
        let token = token.to_string();
        let recipe_id = recipe.id;
        tokio::spawn(async move {
            if let Err(e) = cache.set_recipe_id(&token, recipe_id, None).await {
                error!("Failed to cache short link target: {}", e);
            }
        });

        Ok(recipe.canonical_path())
    }

    /// Drops a cached token mapping, called when the owning recipe is
    /// deleted. Cache errors are logged, never surfaced.
    pub async fn invalidate(&self, token: &str) {
        if let Err(e) = self.cache.invalidate(token).await {
            error!("Failed to invalidate short link cache: {}", e);
        }
    }
}
