//! DTO for the short link lookup endpoint.

use serde::Serialize;

/// Response carrying the absolute short URL of a recipe.
///
/// The field serializes as `short-link`, the form frontend clients
/// consume.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
