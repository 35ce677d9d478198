//! Filter and ordering description for tour listings.
//!
//! A [`TourQuery`] is a lazily evaluated description: it holds the optional
//! predicates and the requested sort, and is rendered into SQL by the
//! persistence layer. Predicates are independent and combined with AND.

use chrono::NaiveDate;
use std::fmt;

use crate::domain::entities::Price;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses `asc` or `desc` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Tour fields that clients may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourSortField {
    Price,
    StartDate,
}

impl TourSortField {
    pub const ALLOWED: &'static [&'static str] = &["price", "start_date"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "start_date" => Some(Self::StartDate),
            _ => None,
        }
    }

    /// Column backing this field. Only these whitelisted names ever reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            TourSortField::Price => "price",
            TourSortField::StartDate => "start_date",
        }
    }
}

impl fmt::Display for TourSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A requested sort: field and direction always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourSort {
    pub field: TourSortField,
    pub order: SortOrder,
}

impl TourSort {
    pub fn new(field: TourSortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// One `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: &'static str,
    pub order: SortOrder,
}

/// Filter and sort description for the tours of one travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourQuery {
    pub price_from: Option<Price>,
    pub price_to: Option<Price>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort: Option<TourSort>,
}

impl TourQuery {
    /// A query with no predicates and default ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts tours to `from <= price <= to`; either bound may be absent.
    pub fn with_price_range(mut self, from: Option<Price>, to: Option<Price>) -> Self {
        self.price_from = from;
        self.price_to = to;
        self
    }

    /// Restricts tours to `from <= start_date <= to`; either bound may be absent.
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_sort(mut self, sort: Option<TourSort>) -> Self {
        self.sort = sort;
        self
    }

    /// Full ordering applied to the listing.
    ///
    /// The requested sort comes first, then `start_date ASC` and `id ASC`
    /// as tie-breakers, so every page boundary is deterministic.
    pub fn ordering(&self) -> Vec<OrderTerm> {
        let mut terms = Vec::with_capacity(3);

        if let Some(sort) = self.sort {
            terms.push(OrderTerm {
                column: sort.field.column(),
                order: sort.order,
            });
        }

        for column in ["start_date", "id"] {
            if !terms.iter().any(|t| t.column == column) {
                terms.push(OrderTerm {
                    column,
                    order: SortOrder::Asc,
                });
            }
        }

        terms
    }

    /// True when the price bounds exclude every tour.
    pub fn has_empty_price_range(&self) -> bool {
        matches!((self.price_from, self.price_to), (Some(from), Some(to)) if from > to)
    }
}
