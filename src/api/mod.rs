//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into listing operations and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and JSON resources
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
