//! PostgreSQL implementation of the ingredient repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Ingredient, NewIngredient};
use crate::domain::repositories::IngredientRepository;
use crate::error::AppError;

/// PostgreSQL repository for the ingredient catalog.
pub struct PgIngredientRepository {
    pool: Arc<PgPool>,
}

impl PgIngredientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_ingredient(row: &PgRow) -> Result<Ingredient, sqlx::Error> {
    Ok(Ingredient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        measurement_unit: row.try_get("measurement_unit")?,
    })
}

#[async_trait]
impl IngredientRepository for PgIngredientRepository {
    async fn list(&self, name_filter: Option<String>) -> Result<Vec<Ingredient>, AppError> {
        // ILIKE pattern wildcards in user input are escaped so a literal
        // "%" searches for a percent sign.
        let pattern = name_filter.map(|n| {
            format!(
                "%{}%",
                n.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
            )
        });

        let rows = sqlx::query(
            "SELECT id, name, measurement_unit
             FROM ingredients
             WHERE ($1::text IS NULL OR name ILIKE $1)
             ORDER BY name, measurement_unit",
        )
        .bind(pattern)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .iter()
            .map(map_ingredient)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError> {
        let row = sqlx::query("SELECT id, name, measurement_unit FROM ingredients WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.as_ref().map(map_ingredient).transpose()?)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Ingredient>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .iter()
            .map(map_ingredient)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn bulk_import(&self, ingredients: &[NewIngredient]) -> Result<u64, AppError> {
        let names: Vec<String> = ingredients.iter().map(|i| i.name.clone()).collect();
        let units: Vec<String> = ingredients
            .iter()
            .map(|i| i.measurement_unit.clone())
            .collect();

        let result = sqlx::query(
            "INSERT INTO ingredients (name, measurement_unit)
             SELECT name, unit FROM UNNEST($1::text[], $2::text[]) AS t(name, unit)
             ON CONFLICT (name, measurement_unit) DO NOTHING",
        )
        .bind(&names)
        .bind(&units)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
