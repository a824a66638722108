//! Tag catalog storage.

use crate::domain::entities::{NewTag, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the tag catalog.
///
/// Tags are reference data: read by the API, written only by the
/// operator import tooling.
///
/// Implemented by [`crate::infrastructure::persistence::PgTagRepository`];
/// a mockall double is generated under `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Lists all tags ordered by name.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn list(&self) -> Result<Vec<Tag>, AppError>;

    /// Finds a tag by id.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;

    /// Fetches the tags matching `ids`; missing ids are silently absent
    /// from the result, which callers use for existence validation.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Tag>, AppError>;

    /// Inserts tags in bulk, skipping rows that collide with existing
    /// names or slugs. Returns the number of rows actually inserted.
    ///
    /// # Errors
    ///
    /// Database failures surface as [`AppError::Internal`].
    async fn bulk_import(&self, tags: &[NewTag]) -> Result<u64, AppError>;
}
