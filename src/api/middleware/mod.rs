//! Cross-cutting request machinery: Bearer auth, rate limits, spans.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
