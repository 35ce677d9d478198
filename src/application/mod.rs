//! Application layer services implementing the listing use cases.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::travel_service::TravelService`] - Public travel listing and slug resolution
//! - [`services::tour_service::TourService`] - Filtered, paginated tours of a travel

pub mod services;
