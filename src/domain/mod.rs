//! Domain layer containing listing entities, query descriptions and
//! repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Travels, tours and their value types
//! - [`query`] - Optional filters and ordering for tour listings
//! - [`pagination`] - Page requests and materialized pages
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or SQL. Repository traits are
//! implemented in [`crate::infrastructure::persistence`], and the filter
//! description in [`query::TourQuery`] is rendered into SQL there.

pub mod entities;
pub mod pagination;
pub mod query;
pub mod repositories;
