//! DTOs for the tour listing endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::api::dto::pagination::page_request;
use crate::domain::entities::{Price, PriceError, Tour};
use crate::domain::pagination::PageRequest;
use crate::domain::query::{SortOrder, TourQuery, TourSort, TourSortField};

/// Date format accepted by `dateFrom` / `dateTo`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query string of `GET /api/v1/travel/{slug}/tours`.
///
/// Values are kept as raw strings so that each malformed field is reported
/// individually; empty values count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TourListQuery {
    /// Lower price bound in major units, e.g. `"150"` or `"99.90"`.
    #[serde(rename = "priceFrom", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_price"))]
    pub price_from: Option<String>,

    /// Upper price bound in major units.
    #[serde(rename = "priceTo", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_price"))]
    pub price_to: Option<String>,

    /// Earliest start date, `YYYY-MM-DD`.
    #[serde(rename = "dateFrom", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_date"))]
    pub date_from: Option<String>,

    /// Latest start date, `YYYY-MM-DD`.
    #[serde(rename = "dateTo", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_date"))]
    pub date_to: Option<String>,

    /// `price` or `start_date`. Ignored unless `sortOrder` is also given.
    #[serde(rename = "sortBy", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_sort_by"))]
    pub sort_by: Option<String>,

    /// `asc` or `desc`. Ignored unless `sortBy` is also given.
    #[serde(rename = "sortOrder", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_sort_order"))]
    pub sort_order: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<u32>,
}

fn validate_price(value: &str) -> Result<(), ValidationError> {
    Price::upper_bound(value).map(|_| ()).map_err(|e| {
        ValidationError::new("price").with_message(format!("Invalid amount: {e}").into())
    })
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value).map(|_| ()).ok_or_else(|| {
        ValidationError::new("date").with_message("Date must be in YYYY-MM-DD format".into())
    })
}

fn validate_sort_by(value: &str) -> Result<(), ValidationError> {
    TourSortField::parse(value).map(|_| ()).ok_or_else(|| {
        ValidationError::new("sort_by").with_message(
            format!("Sort field must be one of: {}", TourSortField::ALLOWED.join(", ")).into(),
        )
    })
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    SortOrder::parse(value).map(|_| ()).ok_or_else(|| {
        ValidationError::new("sort_order").with_message("Sort order must be asc or desc".into())
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Query string value that counts as "no bound".
const ABSENT_PRICE: &str = "0";

/// Parses a price bound; a bare `0` is the same as an absent bound.
fn price_bound(
    value: Option<&str>,
    convert: fn(&str) -> Result<Price, PriceError>,
) -> Option<Price> {
    value
        .map(str::trim)
        .filter(|v| *v != ABSENT_PRICE)
        .and_then(|v| convert(v).ok())
}

impl TourListQuery {
    /// Converts validated parameters into a [`TourQuery`].
    ///
    /// Call [`Validate::validate`] first: values that fail to parse here are
    /// treated as absent.
    pub fn to_tour_query(&self) -> TourQuery {
        let sort = match (
            self.sort_by.as_deref().and_then(TourSortField::parse),
            self.sort_order.as_deref().and_then(SortOrder::parse),
        ) {
            (Some(field), Some(order)) => Some(TourSort::new(field, order)),
            _ => None,
        };

        TourQuery::new()
            .with_price_range(
                price_bound(self.price_from.as_deref(), Price::lower_bound),
                price_bound(self.price_to.as_deref(), Price::upper_bound),
            )
            .with_date_range(
                self.date_from.as_deref().and_then(parse_date),
                self.date_to.as_deref().and_then(parse_date),
            )
            .with_sort(sort)
    }

    pub fn page_request(&self) -> PageRequest {
        page_request(self.page)
    }

    /// Query string name of a field, for error details.
    pub fn param_name(field: &str) -> &str {
        match field {
            "price_from" => "priceFrom",
            "price_to" => "priceTo",
            "date_from" => "dateFrom",
            "date_to" => "dateTo",
            "sort_by" => "sortBy",
            "sort_order" => "sortOrder",
            other => other,
        }
    }
}

/// Public JSON representation of a tour.
#[derive(Debug, Serialize)]
pub struct TourResource {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Decimal string in major units, e.g. `"125.45"`.
    pub price: Price,
}

impl From<Tour> for TourResource {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id,
            name: tour.name,
            start_date: tour.start_date,
            end_date: tour.end_date,
            price: tour.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(value: serde_json::Value) -> TourListQuery {
        serde_json::from_value(value).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_empty_query_has_no_predicates() {
        let q = query(json!({}));
        assert!(q.validate().is_ok());
        assert_eq!(q.to_tour_query(), TourQuery::new());
        assert_eq!(q.page_request(), PageRequest::first());
    }

    #[test]
    fn test_all_filters_convert() {
        let q = query(json!({
            "priceFrom": "150",
            "priceTo": "250.5",
            "dateFrom": "2026-01-01",
            "dateTo": "2026-02-01",
            "sortBy": "price",
            "sortOrder": "desc",
            "page": "2"
        }));

        assert!(q.validate().is_ok());

        let tour_query = q.to_tour_query();
        assert_eq!(tour_query.price_from, Some(Price::from_minor(15000)));
        assert_eq!(tour_query.price_to, Some(Price::from_minor(25050)));
        assert_eq!(tour_query.date_from, Some(date("2026-01-01")));
        assert_eq!(tour_query.date_to, Some(date("2026-02-01")));
        assert_eq!(
            tour_query.sort,
            Some(TourSort::new(TourSortField::Price, SortOrder::Desc))
        );
        assert_eq!(q.page_request(), PageRequest::new(2));
    }

    #[test]
    fn test_sort_requires_both_field_and_order() {
        let only_field = query(json!({ "sortBy": "price" }));
        assert!(only_field.validate().is_ok());
        assert_eq!(only_field.to_tour_query().sort, None);

        let only_order = query(json!({ "sortOrder": "asc" }));
        assert!(only_order.validate().is_ok());
        assert_eq!(only_order.to_tour_query().sort, None);
    }

    #[test]
    fn test_bare_zero_price_is_treated_as_absent() {
        let q = query(json!({ "priceFrom": "0", "priceTo": "0" }));
        assert!(q.validate().is_ok());

        let tour_query = q.to_tour_query();
        assert_eq!(tour_query.price_from, None);
        assert_eq!(tour_query.price_to, None);
    }

    #[test]
    fn test_decimal_zero_price_is_a_bound() {
        let q = query(json!({ "priceTo": "0.00" }));
        assert!(q.validate().is_ok());
        assert_eq!(q.to_tour_query().price_to, Some(Price::ZERO));
    }

    #[test]
    fn test_sub_cent_bounds_round_inward() {
        let q = query(json!({ "priceFrom": "100.005", "priceTo": "200.009" }));
        assert!(q.validate().is_ok());

        let tour_query = q.to_tour_query();
        assert_eq!(tour_query.price_from, Some(Price::from_minor(10001)));
        assert_eq!(tour_query.price_to, Some(Price::from_minor(20000)));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let q = query(json!({ "priceFrom": "", "dateTo": "", "sortBy": "" }));
        assert!(q.validate().is_ok());
        assert_eq!(q.to_tour_query(), TourQuery::new());
    }

    #[test]
    fn test_invalid_values_fail_per_field() {
        let q = query(json!({
            "priceFrom": "cheap",
            "priceTo": "-5",
            "dateFrom": "01/02/2026",
            "dateTo": "2026-13-40",
            "sortBy": "name",
            "sortOrder": "sideways",
            "page": "0"
        }));

        let errors = q.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 7);

        let field_errors = errors.field_errors();
        let mut names: Vec<&str> = field_errors
            .keys()
            .map(|field| TourListQuery::param_name(field))
            .collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "dateFrom",
                "dateTo",
                "page",
                "priceFrom",
                "priceTo",
                "sortBy",
                "sortOrder"
            ]
        );
    }

    #[test]
    fn test_resource_serializes_price_as_string() {
        let start = date("2026-03-01");
        let tour = Tour {
            id: 9,
            travel_id: 1,
            name: "Spring".to_string(),
            price: Price::parse("125.45").unwrap(),
            start_date: start,
            end_date: date("2026-03-05"),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(TourResource::from(tour)).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["price"], "125.45");
        assert_eq!(json["start_date"], "2026-03-01");
        assert_eq!(json["end_date"], "2026-03-05");
        assert!(json.get("travel_id").is_none());
    }
}
