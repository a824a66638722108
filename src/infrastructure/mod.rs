//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and document
//! rendering.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`rendering`] - Shopping list export formats (plain text and PDF)

pub mod cache;
pub mod persistence;
pub mod rendering;
