//! Domain-wide limits and document layout metrics.
//!
//! Validation bounds are enforced at the API boundary (DTO + service
//! checks), not by the schema, so services and tests read them from here.

/// Maximum length of a user's email address.
pub const MAX_LEN_EMAIL: usize = 254;
/// Maximum length of a username, first name, and last name.
pub const MAX_LEN_USERNAME: usize = 150;

/// Maximum length of recipe, tag, and ingredient names.
pub const MAX_LEN_NAME: usize = 256;
/// Maximum length of a tag slug.
pub const MAX_LEN_SLUG: usize = 50;
/// Maximum length of recipe instructions.
pub const MAX_LEN_TEXT: usize = 5000;
/// Maximum length of an ingredient measurement unit.
pub const MAX_LEN_UNIT: usize = 20;

/// Inclusive bounds for a single ingredient amount in a recipe.
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;
pub const MAX_INGREDIENT_AMOUNT: i32 = 32;

/// Inclusive bounds for recipe cooking time, in minutes.
pub const MIN_COOKING_TIME: i32 = 1;
pub const MAX_COOKING_TIME: i32 = 300;

/// Default and maximum page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default number of recipe cards in a subscription preview.
pub const DEFAULT_RECIPES_PREVIEW: u32 = DEFAULT_PAGE_SIZE;

/// URL path segment under which short links are served.
pub const SHORT_LINK_PATH: &str = "s";

/// Attachment filenames for shopping list downloads.
pub const TXT_FILENAME: &str = "shopping_list.txt";
pub const PDF_FILENAME: &str = "shopping_list.pdf";

/// Shopping list PDF layout, in points. Pages are A4, origin bottom-left.
pub const PDF_FONT_SIZE_HEADER: f32 = 16.0;
pub const PDF_FONT_SIZE_LINE: f32 = 10.0;
pub const PDF_INDENT_TOP: f32 = 40.0;
pub const PDF_INDENT_LEFT: f32 = 30.0;
pub const PDF_INDENT_AFTER_HEADER: f32 = 30.0;
pub const PDF_LINE_SPACING: f32 = 20.0;
