//! Handler for the public travel listing.

use axum::{
    Json,
    extract::{OriginalUri, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::pagination::{PageParams, PaginatedResponse};
use crate::api::dto::travel::TravelResource;
use crate::error::AppError;
use crate::state::AppState;

/// Lists public travels, 15 per page.
///
/// # Endpoint
///
/// `GET /api/v1/travel`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
///
/// Travels with `is_public = false` are never listed; no parameter can
/// change that.
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is not a positive integer.
pub async fn travel_list_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse<TravelResource>>, AppError> {
    let Query(params) = params?;
    params.validate()?;

    let travels = state
        .travel_service
        .list_public(params.page_request())
        .await?;

    metrics::counter!("listing_requests_total", "resource" => "travels").increment(1);

    Ok(Json(PaginatedResponse::from_page(
        travels,
        uri.path(),
        TravelResource::from,
    )))
}
