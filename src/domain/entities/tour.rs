//! Tour entity: a bookable, dated instance of a travel.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::Price;

/// A tour belonging to exactly one travel.
#[derive(Debug, Clone)]
pub struct Tour {
    pub id: i64,
    pub travel_id: i64,
    pub name: String,
    pub price: Price,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a tour.
#[derive(Debug, Clone)]
pub struct NewTour {
    pub travel_id: i64,
    pub name: String,
    pub price: Price,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
