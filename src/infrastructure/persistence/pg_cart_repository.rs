//! PostgreSQL implementation of the cart repository.
//!
//! Holds the aggregation query behind shopping-list downloads: one
//! consistent read joining cart entries to ingredient amounts, grouped by
//! ingredient record identity and summed as integers.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::ShoppingListItem;
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// PostgreSQL repository for shopping cart entries and aggregation.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "INSERT INTO shopping_cart_items (user_id, recipe_id)
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
        let result =
            sqlx::query("DELETE FROM shopping_cart_items WHERE user_id = $1 AND recipe_id = $2")
                .bind(user_id)
                .bind(recipe_id)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn filter_in_cart(
        &self,
        user_id: i64,
        recipe_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT recipe_id FROM shopping_cart_items
             WHERE user_id = $1 AND recipe_id = ANY($2)",
        )
        .bind(user_id)
        .bind(recipe_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }

    async fn recipe_names(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT r.name
             FROM shopping_cart_items sci
             JOIN recipes r ON r.id = sci.recipe_id
             WHERE sci.user_id = $1
             ORDER BY r.name, r.id",
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(names)
    }

    async fn aggregate_ingredients(&self, user_id: i64) -> Result<Vec<ShoppingListItem>, AppError> {
        // Grouping by ingredient id keeps same-named ingredients with
        // different units on separate lines; SUM over INTEGER yields
        // BIGINT, so totals never touch floating point.
        let rows = sqlx::query(
            "SELECT i.name, i.measurement_unit, SUM(ri.amount)::bigint AS total_amount
             FROM shopping_cart_items sci
             JOIN recipe_ingredients ri ON ri.recipe_id = sci.recipe_id
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE sci.user_id = $1
             GROUP BY i.id, i.name, i.measurement_unit
             ORDER BY i.name, i.measurement_unit, i.id",
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(ShoppingListItem {
                    name: row.try_get("name")?,
                    measurement_unit: row.try_get("measurement_unit")?,
                    total_amount: row.try_get("total_amount")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(AppError::from)
    }
}
