//! DTOs for the shopping cart download endpoint.

use serde::Deserialize;

/// Query parameters for the shopping list download.
#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    /// Output format, defaulting to plain text.
    #[serde(default)]
    pub format: DocumentFormat,
}

/// Supported shopping list document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Txt,
    Pdf,
}
