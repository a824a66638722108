//! Utility functions shared across the application.
//!
//! - [`short_code`] - Short-link code generation
//! - [`token_hash`] - Keyed hashing of API tokens

pub mod short_code;
pub mod token_hash;
