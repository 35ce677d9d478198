//! Handler for listing the tours of one travel.

use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::pagination::PaginatedResponse;
use crate::api::dto::tour::{TourListQuery, TourResource};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the tours of the travel addressed by `slug`, 15 per page.
///
/// # Endpoint
///
/// `GET /api/v1/travel/{slug}/tours`
///
/// # Query Parameters
///
/// - `priceFrom`, `priceTo` (optional): price bounds in major units, inclusive
/// - `dateFrom`, `dateTo` (optional): start date bounds (`YYYY-MM-DD`), inclusive
/// - `sortBy` (`price` | `start_date`) with `sortOrder` (`asc` | `desc`):
///   applied only when both are present
/// - `page` (optional): Page number (default: 1)
///
/// Tours are always ordered by `start_date` ascending after any requested
/// sort.
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     { "id": 1, "name": "Spring", "start_date": "2026-03-01", "end_date": "2026-03-08", "price": "125.45" }
///   ],
///   "links": { "first": "...?page=1", "last": "...?page=1", "prev": null, "next": null },
///   "meta": { "current_page": 1, "from": 1, "last_page": 1, "path": "...", "per_page": 15, "to": 1, "total": 1 }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with per-field details if any parameter is malformed.
/// Returns 404 Not Found if no travel has this slug.
pub async fn tour_list_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: Result<Query<TourListQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<TourResource>>, AppError> {
    let Query(params) = params?;
    params
        .validate()
        .map_err(|e| AppError::invalid_params(e, TourListQuery::param_name))?;

    let travel = state.travel_service.get_by_slug(&slug).await?;

    let tours = state
        .tour_service
        .list_for_travel(&travel, &params.to_tour_query(), params.page_request())
        .await?;

    metrics::counter!("listing_requests_total", "resource" => "tours").increment(1);

    Ok(Json(PaginatedResponse::from_page(
        tours,
        uri.path(),
        TourResource::from,
    )))
}
