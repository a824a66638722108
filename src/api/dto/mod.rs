//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod ingredient;
pub mod pagination;
pub mod recipe;
pub mod shopping_cart;
pub mod short_link;
pub mod tag;
pub mod user;
