//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod tours;
pub mod travels;

pub use health::health_handler;
pub use tours::tour_list_handler;
pub use travels::travel_list_handler;
