//! PostgreSQL implementation of the favorite repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// PostgreSQL repository for the (user, recipe) favorites relation.
pub struct PgFavoriteRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "INSERT INTO favorites (user_id, recipe_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn filter_favorited(
        &self,
        user_id: i64,
        recipe_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT recipe_id FROM favorites
             WHERE user_id = $1 AND recipe_id = ANY($2)",
        )
        .bind(user_id)
        .bind(recipe_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }
}
