//! HTTP surface: request/response types in [`dto`], endpoint logic in
//! [`handlers`], cross-cutting concerns in [`middleware`], and the
//! route table in [`routes`].

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
