//! Page query parameter and the paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::pagination::{Page, PageRequest};

/// Page number query parameter.
///
/// Uses `serde_with` to parse the page number from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<u32>,
}

impl PageParams {
    /// Page request for a validated page number, defaulting to page 1.
    pub fn page_request(&self) -> PageRequest {
        page_request(self.page)
    }
}

/// Page request for an optional, already validated page number.
pub fn page_request(page: Option<u32>) -> PageRequest {
    page.map(PageRequest::new).unwrap_or_default()
}

/// Listing envelope: `{ "data": [...], "links": {...}, "meta": {...} }`.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

/// Navigation URLs. `prev`/`next` are `null` at either end.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata.
///
/// `from`/`to` are the 1-based positions of the first and last item on
/// this page and are `null` when the page is empty.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub from: Option<i64>,
    pub last_page: u32,
    pub path: String,
    pub per_page: u32,
    pub to: Option<i64>,
    pub total: i64,
}

impl<T> PaginatedResponse<T> {
    /// Builds the envelope from a domain page, converting each item.
    ///
    /// `path` is the request path used to build navigation links.
    pub fn from_page<E>(page: Page<E>, path: &str, convert: impl FnMut(E) -> T) -> Self {
        let last_page = page.last_page();
        let current = page.current_page;
        let url = |n: u32| format!("{path}?page={n}");

        let links = PageLinks {
            first: url(1),
            last: url(last_page),
            prev: (current > 1).then(|| url(current - 1)),
            next: page.has_more_pages().then(|| url(current + 1)),
        };

        let meta = PageMeta {
            current_page: current,
            from: page.first_item(),
            last_page,
            path: path.to_string(),
            per_page: page.per_page,
            to: page.last_item(),
            total: page.total,
        };

        Self {
            data: page.items.into_iter().map(convert).collect(),
            links,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(len: usize, number: u32, total: i64) -> Page<usize> {
        Page::new((0..len).collect(), PageRequest::new(number), total)
    }

    #[test]
    fn test_page_request_defaults_to_first_page() {
        assert_eq!(PageParams::default().page_request(), PageRequest::first());
        assert_eq!(page_request(Some(3)), PageRequest::new(3));
    }

    #[test]
    fn test_page_zero_fails_validation() {
        let params = PageParams { page: Some(0) };
        assert!(params.validate().is_err());

        let params = PageParams { page: Some(1) };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_first_page_envelope() {
        let response = PaginatedResponse::from_page(page(15, 1, 16), "/api/v1/travel", |i| i);

        assert_eq!(response.data.len(), 15);
        assert_eq!(response.meta.current_page, 1);
        assert_eq!(response.meta.last_page, 2);
        assert_eq!(response.meta.per_page, 15);
        assert_eq!(response.meta.total, 16);
        assert_eq!(response.meta.from, Some(1));
        assert_eq!(response.meta.to, Some(15));
        assert_eq!(response.links.first, "/api/v1/travel?page=1");
        assert_eq!(response.links.last, "/api/v1/travel?page=2");
        assert_eq!(response.links.prev, None);
        assert_eq!(
            response.links.next.as_deref(),
            Some("/api/v1/travel?page=2")
        );
    }

    #[test]
    fn test_page_past_the_end_envelope() {
        let response = PaginatedResponse::from_page(page(0, 4, 16), "/t", |i| i);

        assert!(response.data.is_empty());
        assert_eq!(response.meta.last_page, 2);
        assert_eq!(response.meta.from, None);
        assert_eq!(response.meta.to, None);
        assert_eq!(response.links.prev.as_deref(), Some("/t?page=3"));
        assert_eq!(response.links.next, None);
    }

    #[test]
    fn test_envelope_serializes_meta_keys() {
        let response = PaginatedResponse::from_page(page(1, 1, 1), "/t", |i| i);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["current_page"], 1);
        assert_eq!(json["meta"]["last_page"], 1);
        assert!(json["links"]["next"].is_null());
        assert_eq!(json["data"][0], 0);
    }

    #[test]
    fn test_page_params_parse_from_query_string() {
        let params: PageParams = serde_json::from_str(r#"{"page": "2"}"#).unwrap();
        assert_eq!(params.page, Some(2));

        assert!(serde_json::from_str::<PageParams>(r#"{"page": "two"}"#).is_err());
    }
}
