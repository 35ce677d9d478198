//! Tour listing service.

use std::sync::Arc;

use crate::domain::entities::{Tour, Travel};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::query::TourQuery;
use crate::domain::repositories::TourRepository;
use crate::error::AppError;

/// Service for listing the tours of one travel.
///
/// The travel must already be resolved (see
/// [`crate::application::services::TravelService::get_by_slug`]); tours are
/// always scoped to its id.
pub struct TourService<R: TourRepository> {
    repository: Arc<R>,
}

impl<R: TourRepository> TourService<R> {
    /// Creates a new tour service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of the travel's tours.
    ///
    /// Filters and ordering from `query` apply before pagination, so page
    /// boundaries are stable for a fixed query and fixed data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_travel(
        &self,
        travel: &Travel,
        query: &TourQuery,
        page: PageRequest,
    ) -> Result<Page<Tour>, AppError> {
        tracing::debug!(
            travel_id = travel.id,
            slug = %travel.slug,
            ?query,
            page = page.page(),
            "Listing tours"
        );

        self.repository
            .list_for_travel(travel.id, query, page)
            .await
    }
}
