//! DTOs for the ingredient catalog.

use serde::{Deserialize, Serialize};

/// Query parameters for the ingredient listing.
#[derive(Debug, Deserialize)]
pub struct IngredientListParams {
    /// Case-insensitive substring filter on the ingredient name.
    pub name: Option<String>,
}

/// Individual ingredient information.
#[derive(Debug, Serialize)]
pub struct IngredientItem {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

/// Response containing matching ingredients.
#[derive(Debug, Serialize)]
pub struct IngredientListResponse {
    pub items: Vec<IngredientItem>,
}
