//! Tag entity for recipe categorization.

/// A recipe tag, referenced by slug in list filters.
///
/// Both `name` and `slug` are unique across all tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Creates a new Tag instance.
    pub fn new(id: i64, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }
}

/// Input data for creating a tag, used by the catalog importer.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}
