//! Pagination query parameters and the shared page envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// `?page=` and `?limit=` as they arrive on list endpoints.
///
/// Query strings carry numbers as text, so `serde_with` re-parses them
/// through [`DisplayFromStr`].
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Fills in defaults (page 1, [`DEFAULT_PAGE_SIZE`]) and bounds the
    /// result: page starts at 1, limit at most [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// A human-readable message for out-of-range values; handlers wrap
    /// it into a 400.
    pub fn resolve(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(format!("Limit must be between 1 and {MAX_PAGE_SIZE}"));
        }

        Ok((page, limit))
    }
}

/// Page metadata attached to every list response.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Builds metadata for one page, rounding the page count up.
    pub fn new(page: u32, limit: u32, total_items: i64) -> Self {
        let total_pages = (total_items.max(0) as u64).div_ceil(u64::from(limit)) as u32;

        Self {
            page,
            limit,
            total_items,
            total_pages,
        }
    }
}
