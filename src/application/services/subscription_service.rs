//! User-follows-author subscriptions.

use std::sync::Arc;

use crate::domain::entities::{RecipeSummary, User};
use crate::domain::repositories::{RecipeRepository, SubscriptionRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// Service maintaining the (follower, author) subscription relation and
/// assembling subscription listings with recipe previews.
pub struct SubscriptionService<S: SubscriptionRepository, U: UserRepository, R: RecipeRepository> {
    subscription_repository: Arc<S>,
    user_repository: Arc<U>,
    recipe_repository: Arc<R>,
}

impl<S: SubscriptionRepository, U: UserRepository, R: RecipeRepository>
    SubscriptionService<S, U, R>
{
    /// Creates a new subscription service.
    pub fn new(
        subscription_repository: Arc<S>,
        user_repository: Arc<U>,
        recipe_repository: Arc<R>,
    ) -> Self {
        Self {
            subscription_repository,
            user_repository,
            recipe_repository,
        }
    }

    /// Subscribes `user_id` to `author_id`, returning the author record
    /// for the response body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on self-subscription or when the
    /// subscription already exists.
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub async fn subscribe(&self, user_id: i64, author_id: i64) -> Result<User, AppError> {
        if user_id == author_id {
            return Err(AppError::bad_request(
                "Cannot subscribe to yourself",
                json!({ "author_id": author_id }),
            ));
        }

        let author = self.require_user(author_id).await?;

        if !self.subscription_repository.add(user_id, author_id).await? {
            return Err(AppError::bad_request(
                "Already subscribed to this author",
                json!({ "author_id": author_id }),
            ));
        }

        Ok(author)
    }

    /// Removes a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the subscription does not exist.
    pub async fn unsubscribe(&self, user_id: i64, author_id: i64) -> Result<(), AppError> {
        if !self
            .subscription_repository
            .remove(user_id, author_id)
            .await?
        {
            return Err(AppError::not_found(
                "Not subscribed to this author",
                json!({ "author_id": author_id }),
            ));
        }
        Ok(())
    }

    /// Whether `user_id` follows `author_id`. Anonymous callers are
    /// handled upstream and never reach this.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn is_subscribed(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        self.subscription_repository
            .is_subscribed(user_id, author_id)
            .await
    }

    /// Of the given author ids, those `user_id` follows.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn filter_subscribed(
        &self,
        user_id: i64,
        author_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        self.subscription_repository
            .filter_subscribed(user_id, author_ids)
            .await
    }

    /// Fetches user profiles in bulk, skipping missing ids.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        self.user_repository.find_by_ids(ids).await
    }

    /// One page of the user's followed authors, oldest subscription
    /// first, plus the total subscription count.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn subscriptions_page(
        &self,
        user_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<User>, i64), AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let authors = self
            .subscription_repository
            .authors_for(user_id, offset, i64::from(page_size))
            .await?;
        let total = self.subscription_repository.count_for(user_id).await?;

        Ok((authors, total))
    }

    /// Newest recipes of an author as compact cards, capped at `limit`,
    /// plus the author's total recipe count.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    pub async fn author_recipes(
        &self,
        author_id: i64,
        limit: i64,
    ) -> Result<(Vec<RecipeSummary>, i64), AppError> {
        let summaries = self
            .recipe_repository
            .summaries_by_author(author_id, limit)
            .await?;
        let total = self.recipe_repository.count_by_author(author_id).await?;

        Ok((summaries, total))
    }

    /// Retrieves a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has the given id.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.require_user(id).await
    }

    async fn require_user(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }
}
