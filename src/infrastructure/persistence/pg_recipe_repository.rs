//! PostgreSQL implementation of the recipe repository.
//!
//! Creation and update run in a transaction covering the recipe row and
//! its ingredient/tag join rows; update replaces both sets wholesale.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};
use std::sync::Arc;

use crate::domain::entities::{
    IngredientAmount, NewRecipe, Recipe, RecipeDraft, RecipeIngredientDetail, RecipeSummary, Tag,
};
use crate::domain::repositories::{RecipeFilter, RecipeRepository};
use crate::error::AppError;

const RECIPE_COLUMNS: &str =
    "id, author_id, name, instructions, image, cooking_time, short_code, created_at";

/// PostgreSQL repository for recipes and their join rows.
pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_recipe(row: &PgRow) -> Result<Recipe, sqlx::Error> {
    Ok(Recipe {
        id: row.try_get("id")?,
        author_id: row.try_get("author_id")?,
        name: row.try_get("name")?,
        instructions: row.try_get("instructions")?,
        image: row.try_get("image")?,
        cooking_time: row.try_get("cooking_time")?,
        short_code: row.try_get("short_code")?,
        created_at: row.try_get("created_at")?,
    })
}

async fn insert_ingredient_rows(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: i64,
    items: &[IngredientAmount],
) -> Result<(), sqlx::Error> {
    let ingredient_ids: Vec<i64> = items.iter().map(|i| i.ingredient_id).collect();
    let amounts: Vec<i32> = items.iter().map(|i| i.amount).collect();

    sqlx::query(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount)
         SELECT $1, ingredient_id, amount
         FROM UNNEST($2::bigint[], $3::int[]) AS t(ingredient_id, amount)",
    )
    .bind(recipe_id)
    .bind(&ingredient_ids)
    .bind(&amounts)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn insert_tag_rows(
    tx: &mut Transaction<'_, Postgres>,
    recipe_id: i64,
    tag_ids: &[i64],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO recipe_tags (recipe_id, tag_id)
         SELECT $1, tag_id FROM UNNEST($2::bigint[]) AS t(tag_id)",
    )
    .bind(recipe_id)
    .bind(tag_ids)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Shared WHERE clause for list/count. Bind order: $1 author, $2 slug
/// array, $3 favorited-by user, $4 cart-of user.
const FILTER_CLAUSE: &str = "WHERE ($1::bigint IS NULL OR r.author_id = $1)
      AND (cardinality($2::text[]) = 0 OR EXISTS (
          SELECT 1 FROM recipe_tags rt
          JOIN tags t ON t.id = rt.tag_id
          WHERE rt.recipe_id = r.id AND t.slug = ANY($2)))
      AND ($3::bigint IS NULL OR EXISTS (
          SELECT 1 FROM favorites f
          WHERE f.user_id = $3 AND f.recipe_id = r.id))
      AND ($4::bigint IS NULL OR EXISTS (
          SELECT 1 FROM shopping_cart_items s
          WHERE s.user_id = $4 AND s.recipe_id = r.id))";

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "INSERT INTO recipes (author_id, name, instructions, image, cooking_time, short_code)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(new_recipe.author_id)
        .bind(&new_recipe.name)
        .bind(&new_recipe.instructions)
        .bind(&new_recipe.image)
        .bind(new_recipe.cooking_time)
        .bind(&new_recipe.short_code)
        .fetch_one(&mut *tx)
        .await?;
        let recipe = map_recipe(&row).map_err(AppError::from)?;

        insert_ingredient_rows(&mut tx, recipe.id, &new_recipe.ingredients).await?;
        insert_tag_rows(&mut tx, recipe.id, &new_recipe.tag_ids).await?;

        tx.commit().await?;
        Ok(recipe)
    }

    async fn update(&self, id: i64, draft: RecipeDraft) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "UPDATE recipes
             SET name = $2, instructions = $3, image = $4, cooking_time = $5
             WHERE id = $1
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.instructions)
        .bind(&draft.image)
        .bind(draft.cooking_time)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(AppError::not_found(
                "Recipe not found",
                json!({ "id": id }),
            ));
        };
        let recipe = map_recipe(&row).map_err(AppError::from)?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        insert_ingredient_rows(&mut tx, id, &draft.ingredients).await?;
        insert_tag_rows(&mut tx, id, &draft.tag_ids).await?;

        tx.commit().await?;
        Ok(recipe)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(map_recipe).transpose()?)
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE short_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(map_recipe).transpose()?)
    }

    async fn list(
        &self,
        filter: &RecipeFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r
             {FILTER_CLAUSE}
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $5 OFFSET $6"
        ))
        .bind(filter.author_id)
        .bind(&filter.tag_slugs)
        .bind(filter.favorited_by)
        .bind(filter.in_cart_of)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.iter().map(map_recipe).collect::<Result<Vec<_>, _>>()?)
    }

    async fn count(&self, filter: &RecipeFilter) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM recipes r {FILTER_CLAUSE}"
        ))
        .bind(filter.author_id)
        .bind(&filter.tag_slugs)
        .bind(filter.favorited_by)
        .bind(filter.in_cart_of)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn ingredients_for(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<(i64, RecipeIngredientDetail)>, AppError> {
        let rows = sqlx::query(
            "SELECT ri.recipe_id, ri.ingredient_id, i.name, i.measurement_unit, ri.amount
             FROM recipe_ingredients ri
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE ri.recipe_id = ANY($1)
             ORDER BY ri.recipe_id, i.name, i.id",
        )
        .bind(recipe_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| {
                Ok((
                    row.try_get("recipe_id")?,
                    RecipeIngredientDetail {
                        ingredient_id: row.try_get("ingredient_id")?,
                        name: row.try_get("name")?,
                        measurement_unit: row.try_get("measurement_unit")?,
                        amount: row.try_get("amount")?,
                    },
                ))
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(AppError::from)
    }

    async fn tags_for(&self, recipe_ids: &[i64]) -> Result<Vec<(i64, Tag)>, AppError> {
        let rows = sqlx::query(
            "SELECT rt.recipe_id, t.id, t.name, t.slug
             FROM recipe_tags rt
             JOIN tags t ON t.id = rt.tag_id
             WHERE rt.recipe_id = ANY($1)
             ORDER BY rt.recipe_id, t.name",
        )
        .bind(recipe_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| {
                Ok((
                    row.try_get("recipe_id")?,
                    Tag {
                        id: row.try_get("id")?,
                        name: row.try_get("name")?,
                        slug: row.try_get("slug")?,
                    },
                ))
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(AppError::from)
    }

    async fn summaries_by_author(
        &self,
        author_id: i64,
        limit: i64,
    ) -> Result<Vec<RecipeSummary>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, image, cooking_time
             FROM recipes
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(author_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(RecipeSummary {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    image: row.try_get("image")?,
                    cooking_time: row.try_get("cooking_time")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(AppError::from)
    }

    async fn count_by_author(&self, author_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
