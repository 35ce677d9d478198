//! PostgreSQL implementation of tour repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewTour, Price, Tour};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::query::TourQuery;
use crate::domain::repositories::TourRepository;
use crate::error::AppError;

const TOUR_COLUMNS: &str = "id, travel_id, name, price, start_date, end_date, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct TourRow {
    id: i64,
    travel_id: i64,
    name: String,
    price: Price,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TourRow> for Tour {
    fn from(r: TourRow) -> Self {
        Tour {
            id: r.id,
            travel_id: r.travel_id,
            name: r.name,
            price: r.price,
            start_date: r.start_date,
            end_date: r.end_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for tours.
///
/// Filters are bound as parameters; only whitelisted column names from
/// [`TourQuery::ordering`] are written into the SQL text.
pub struct PgTourRepository {
    pool: Arc<PgPool>,
}

impl PgTourRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Appends the `WHERE` clause shared by the count and page queries.
///
/// The travel scope is always present; each optional bound adds one
/// `AND` predicate.
fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, travel_id: i64, query: &TourQuery) {
    builder.push(" WHERE travel_id = ").push_bind(travel_id);

    if let Some(from) = query.price_from {
        builder.push(" AND price >= ").push_bind(from);
    }
    if let Some(to) = query.price_to {
        builder.push(" AND price <= ").push_bind(to);
    }
    if let Some(from) = query.date_from {
        builder.push(" AND start_date >= ").push_bind(from);
    }
    if let Some(to) = query.date_to {
        builder.push(" AND start_date <= ").push_bind(to);
    }
}

/// Builds `SELECT COUNT(*)` over the filtered tours of one travel.
pub(crate) fn count_query(travel_id: i64, query: &TourQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM tours");
    push_filters(&mut builder, travel_id, query);
    builder
}

/// Builds the ordered, sliced `SELECT` for one page.
pub(crate) fn page_query(
    travel_id: i64,
    query: &TourQuery,
    page: PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {TOUR_COLUMNS} FROM tours"));
    push_filters(&mut builder, travel_id, query);

    builder.push(" ORDER BY ");
    let mut terms = builder.separated(", ");
    for term in query.ordering() {
        terms.push(format!("{} {}", term.column, term.order.as_sql()));
    }

    builder.push(" LIMIT ").push_bind(page.limit());
    builder.push(" OFFSET ").push_bind(page.offset());
    builder
}

#[async_trait]
impl TourRepository for PgTourRepository {
    async fn list_for_travel(
        &self,
        travel_id: i64,
        query: &TourQuery,
        page: PageRequest,
    ) -> Result<Page<Tour>, AppError> {
        if query.has_empty_price_range() {
            tracing::debug!(travel_id, ?query, "Price range is empty, skipping query");
            return Ok(Page::new(Vec::new(), page, 0));
        }

        let mut count = count_query(travel_id, query);
        let mut select = page_query(travel_id, query, page);

        let (total, rows) = tokio::try_join!(
            count
                .build_query_scalar::<i64>()
                .fetch_one(self.pool.as_ref()),
            select
                .build_query_as::<TourRow>()
                .fetch_all(self.pool.as_ref()),
        )?;

        Ok(Page::new(
            rows.into_iter().map(Tour::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_tour: NewTour) -> Result<Tour, AppError> {
        let sql = format!(
            r#"
            INSERT INTO tours (travel_id, name, price, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TOUR_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, TourRow>(&sql)
            .bind(new_tour.travel_id)
            .bind(new_tour.name)
            .bind(new_tour.price)
            .bind(new_tour.start_date)
            .bind(new_tour.end_date)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}
