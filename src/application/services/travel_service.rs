//! Travel listing and resolution service.

use std::sync::Arc;

use crate::domain::entities::Travel;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TravelRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for listing public travels and resolving travels by slug.
pub struct TravelService<R: TravelRepository> {
    repository: Arc<R>,
}

impl<R: TravelRepository> TravelService<R> {
    /// Creates a new travel service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of public travels.
    ///
    /// Only travels with `is_public = true` are ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_public(&self, page: PageRequest) -> Result<Page<Travel>, AppError> {
        let travels = self.repository.list_public(page).await?;

        tracing::debug!(
            page = travels.current_page,
            total = travels.total,
            "Listed public travels"
        );

        Ok(travels)
    }

    /// Resolves a travel from its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no travel has this slug.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Travel, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Travel not found", json!({ "slug": slug })))
    }

    /// Checks that the underlying store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
