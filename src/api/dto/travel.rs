//! DTOs for the travel listing endpoint.

use serde::Serialize;

use crate::domain::entities::{Slug, Travel};

/// Public JSON representation of a travel.
#[derive(Debug, Serialize)]
pub struct TravelResource {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub number_of_days: i32,
    pub number_of_nights: i32,
}

impl From<Travel> for TravelResource {
    fn from(travel: Travel) -> Self {
        let number_of_nights = travel.number_of_nights();

        Self {
            id: travel.id,
            name: travel.name,
            slug: travel.slug,
            description: travel.description,
            number_of_days: travel.number_of_days,
            number_of_nights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_resource_includes_derived_nights() {
        let travel = Travel::new(
            3,
            Slug::from_name("Wild Coast"),
            "Wild Coast".to_string(),
            "Cliffs and surf".to_string(),
            6,
            true,
            Utc::now(),
            Utc::now(),
        );

        let json = serde_json::to_value(TravelResource::from(travel)).unwrap();

        assert_eq!(json["name"], "Wild Coast");
        assert_eq!(json["slug"], "wild-coast");
        assert_eq!(json["number_of_days"], 6);
        assert_eq!(json["number_of_nights"], 5);
        assert!(json.get("is_public").is_none());
    }
}
