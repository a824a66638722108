//! PostgreSQL implementation of the subscription repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::SubscriptionRepository;
use crate::error::AppError;

use super::pg_user_repository::map_user;

/// PostgreSQL repository for the (follower, author) relation.
pub struct PgSubscriptionRepository {
    pool: Arc<PgPool>,
}

impl PgSubscriptionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn add(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "INSERT INTO subscriptions (user_id, author_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, author_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(author_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE user_id = $1 AND author_id = $2")
                .bind(user_id)
                .bind(author_id)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_subscribed(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM subscriptions WHERE user_id = $1 AND author_id = $2
             )",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn filter_subscribed(
        &self,
        user_id: i64,
        author_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT author_id FROM subscriptions WHERE user_id = $1 AND author_id = ANY($2)",
        )
        .bind(user_id)
        .bind(author_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }

    async fn authors_for(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT u.id, u.username, u.email, u.first_name, u.last_name, u.avatar, u.created_at
             FROM subscriptions s
             JOIN users u ON u.id = s.author_id
             WHERE s.user_id = $1
             ORDER BY s.created_at, s.id
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.iter().map(map_user).collect::<Result<Vec<_>, _>>()?)
    }

    async fn count_for(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
