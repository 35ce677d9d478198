//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{TourService, TravelService};
use crate::infrastructure::persistence::{PgTourRepository, PgTravelRepository};

/// Services available to handlers.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub travel_service: Arc<TravelService<PgTravelRepository>>,
    pub tour_service: Arc<TourService<PgTourRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services over one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let travel_repository = Arc::new(PgTravelRepository::new(pool.clone()));
        let tour_repository = Arc::new(PgTourRepository::new(pool));

        Self {
            travel_service: Arc::new(TravelService::new(travel_repository)),
            tour_service: Arc::new(TourService::new(tour_repository)),
        }
    }
}
