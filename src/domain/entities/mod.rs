//! Core domain entities representing the listing data model.
//!
//! Entities are plain data structures; the only behaviour they carry is
//! derived data (such as [`Travel::number_of_nights`]).
//!
//! # Entity Types
//!
//! - [`Travel`] - A public trip template addressed by its [`Slug`]
//! - [`Tour`] - A priced, dated instance of a travel
//!
//! # Value Types
//!
//! - [`Price`] - Money in integer minor units
//! - [`Slug`] - URL-safe identifier derived from a name
//!
//! `NewTravel` and `NewTour` are the inputs used by the seeding process.

pub mod price;
pub mod slug;
pub mod tour;
pub mod travel;

pub use price::{Price, PriceError};
pub use slug::Slug;
pub use tour::{NewTour, Tour};
pub use travel::{NewTravel, Travel};
