//! Business logic services for the application layer.

pub mod tour_service;
pub mod travel_service;

pub use tour_service::TourService;
pub use travel_service::TravelService;
