//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access for travels and tours. Concrete
//! PostgreSQL implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`TravelRepository`] - Public travel listing and slug resolution
//! - [`TourRepository`] - Filtered, ordered, paginated tours of one travel
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod tour_repository;
pub mod travel_repository;

pub use tour_repository::TourRepository;
pub use travel_repository::TravelRepository;

#[cfg(test)]
pub use tour_repository::MockTourRepository;
#[cfg(test)]
pub use travel_repository::MockTravelRepository;
