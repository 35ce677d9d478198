//! API route configuration.
//!
//! All endpoints are public and read-only.

use crate::api::handlers::{tour_list_handler, travel_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Version 1 listing routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET /travel`               - Public travels (paginated)
/// - `GET /travel/{slug}/tours`  - Tours of one travel (filtered, sorted, paginated)
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/travel", get(travel_list_handler))
        .route("/travel/{slug}/tours", get(tour_list_handler))
}
