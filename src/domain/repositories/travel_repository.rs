//! Repository trait for travel data access.

use crate::domain::entities::{NewTravel, Travel};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for travels.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTravelRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Lists one page of travels with `is_public = true`, in insertion order.
    ///
    /// The visibility predicate is always applied and cannot be disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_public(&self, page: PageRequest) -> Result<Page<Travel>, AppError>;

    /// Finds a travel by its slug, regardless of visibility.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Travel))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Travel>, AppError>;

    /// Creates a travel, deriving a unique slug from its name.
    ///
    /// On slug collision a numeric suffix is appended (`-2`, `-3`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_travel: NewTravel) -> Result<Travel, AppError>;

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
