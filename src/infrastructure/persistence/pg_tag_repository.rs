//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// PostgreSQL repository for the tag catalog.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_tag(row: &PgRow) -> Result<Tag, sqlx::Error> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
    })
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query("SELECT id, name, slug FROM tags ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.iter().map(map_tag).collect::<Result<Vec<_>, _>>()?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query("SELECT id, name, slug FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.as_ref().map(map_tag).transpose()?)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query("SELECT id, name, slug FROM tags WHERE id = ANY($1) ORDER BY name")
            .bind(ids)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.iter().map(map_tag).collect::<Result<Vec<_>, _>>()?)
    }

    async fn bulk_import(&self, tags: &[NewTag]) -> Result<u64, AppError> {
        let names: Vec<String> = tags.iter().map(|t| t.name.clone()).collect();
        let slugs: Vec<String> = tags.iter().map(|t| t.slug.clone()).collect();

        let result = sqlx::query(
            "INSERT INTO tags (name, slug)
             SELECT name, slug FROM UNNEST($1::text[], $2::text[]) AS t(name, slug)
             ON CONFLICT DO NOTHING",
        )
        .bind(&names)
        .bind(&slugs)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
