//! Travel entity: a public-facing trip template.

use chrono::{DateTime, Utc};

use crate::domain::entities::Slug;

/// A trip template owning zero or more tours.
#[derive(Debug, Clone)]
pub struct Travel {
    pub id: i64,
    pub slug: Slug,
    pub name: String,
    pub description: String,
    pub number_of_days: i32,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Travel {
    /// Creates a new Travel instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        slug: Slug,
        name: String,
        description: String,
        number_of_days: i32,
        is_public: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            name,
            description,
            number_of_days,
            is_public,
            created_at,
            updated_at,
        }
    }

    /// Nights spent on the trip, always one less than the number of days.
    pub fn number_of_nights(&self) -> i32 {
        self.number_of_days - 1
    }
}

/// Input data for creating a travel.
///
/// The slug is not part of the input: it is derived from `name` by the
/// repository at insert time.
#[derive(Debug, Clone)]
pub struct NewTravel {
    pub name: String,
    pub description: String,
    pub number_of_days: i32,
    pub is_public: bool,
}

impl NewTravel {
    /// Base slug for this travel before collision suffixes.
    pub fn base_slug(&self) -> Slug {
        Slug::from_name(&self.name)
    }
}
