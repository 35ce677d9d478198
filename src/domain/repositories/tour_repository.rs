//! Repository trait for tour data access.

use crate::domain::entities::{NewTour, Tour};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::query::TourQuery;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tours.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTourRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_tour.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Lists one page of the tours belonging to `travel_id`.
    ///
    /// Filters and ordering from `query` are applied before slicing, and the
    /// returned total counts every matching tour across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_travel(
        &self,
        travel_id: i64,
        query: &TourQuery,
        page: PageRequest,
    ) -> Result<Page<Tour>, AppError>;

    /// Creates a tour for an existing travel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an
    /// unknown `travel_id` or `end_date < start_date`.
    async fn create(&self, new_tour: NewTour) -> Result<Tour, AppError>;
}
