//! PostgreSQL implementation of travel repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTravel, Slug, Travel};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TravelRepository;
use crate::error::AppError;

/// Upper bound on `-N` suffixes tried before giving up on a slug.
const MAX_SLUG_ATTEMPTS: u32 = 100;

#[derive(sqlx::FromRow)]
struct TravelRow {
    id: i64,
    slug: Slug,
    name: String,
    description: String,
    number_of_days: i32,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TravelRow> for Travel {
    fn from(r: TravelRow) -> Self {
        Travel::new(
            r.id,
            r.slug,
            r.name,
            r.description,
            r.number_of_days,
            r.is_public,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for travels.
pub struct PgTravelRepository {
    pool: Arc<PgPool>,
}

impl PgTravelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TravelRepository for PgTravelRepository {
    async fn list_public(&self, page: PageRequest) -> Result<Page<Travel>, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM travels
            WHERE is_public = TRUE
            "#,
        )
        .fetch_one(self.pool.as_ref());

        let rows = sqlx::query_as::<_, TravelRow>(
            r#"
            SELECT id, slug, name, description, number_of_days, is_public, created_at, updated_at
            FROM travels
            WHERE is_public = TRUE
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool.as_ref());

        let (total, rows) = tokio::try_join!(count, rows)?;

        Ok(Page::new(
            rows.into_iter().map(Travel::from).collect(),
            page,
            total,
        ))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Travel>, AppError> {
        let row = sqlx::query_as::<_, TravelRow>(
            r#"
            SELECT id, slug, name, description, number_of_days, is_public, created_at, updated_at
            FROM travels
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Travel::from))
    }

    async fn create(&self, new_travel: NewTravel) -> Result<Travel, AppError> {
        let base = new_travel.base_slug();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = base.with_suffix(attempt);

            let row = sqlx::query_as::<_, TravelRow>(
                r#"
                INSERT INTO travels (slug, name, description, number_of_days, is_public)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (slug) DO NOTHING
                RETURNING id, slug, name, description, number_of_days, is_public, created_at, updated_at
                "#,
            )
            .bind(&slug)
            .bind(&new_travel.name)
            .bind(&new_travel.description)
            .bind(new_travel.number_of_days)
            .bind(new_travel.is_public)
            .fetch_optional(self.pool.as_ref())
            .await?;

            if let Some(row) = row {
                return Ok(row.into());
            }

            tracing::debug!(%slug, attempt, "Slug taken, trying next suffix");
        }

        Err(AppError::internal(
            "Could not generate a unique slug",
            json!({ "name": new_travel.name }),
        ))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
