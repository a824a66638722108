//! Shopping list document renderers.
//!
//! Two output formats: a plain-text listing and a paginated A4 PDF. Both
//! consume the same [`crate::domain::entities::ShoppingList`] model, so
//! aggregation happens exactly once regardless of format.

pub mod pdf;
pub mod text;

use serde_json::json;
use thiserror::Error;

use crate::error::AppError;

/// Document generation failures.
///
/// Rendering never mutates persisted state, so these are surfaced as
/// server errors and not retried.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font resource unavailable: {0}")]
    Font(String),
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::rendering(e.to_string(), json!({}))
    }
}

/// Uppercases the first character and lowercases the rest, so catalog
/// names stored in lowercase read naturally in the documents.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
