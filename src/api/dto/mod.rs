//! Data Transfer Objects for API requests and responses.
//!
//! Query DTOs use Serde for deserialization and validator for per-field
//! validation; resource DTOs define the public JSON shape of entities.

pub mod health;
pub mod pagination;
pub mod tour;
pub mod travel;
