//! Ingredient entity for the shared catalog.

/// A catalog ingredient.
///
/// The (name, measurement_unit) pair is unique; the same name may appear
/// under several units as distinct records, and aggregation keys on the
/// record identity rather than the name string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    /// Creates a new Ingredient instance.
    pub fn new(id: i64, name: String, measurement_unit: String) -> Self {
        Self {
            id,
            name,
            measurement_unit,
        }
    }
}

/// Input data for creating an ingredient, used by the catalog importer.
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}
