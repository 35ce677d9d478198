//! CLI administration tool for travel-api.
//!
//! Provides commands for inspecting the catalogue, seeding demo data
//! and performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all travels (public and private)
//! cargo run --bin admin -- travels
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Insert 5 travels with 20 tours each
//! cargo run --bin admin -- seed --travels 5 --tours 20 -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use travel_api::domain::entities::{NewTour, NewTravel, Price};
use travel_api::domain::repositories::{TourRepository, TravelRepository};
use travel_api::infrastructure::persistence::{PgTourRepository, PgTravelRepository};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

/// CLI tool for managing travel-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List all travels with visibility and tour counts
    Travels,

    /// Show statistics
    Stats,

    /// Insert demo travels and tours
    Seed {
        /// Number of travels to create
        #[arg(long, default_value_t = 5)]
        travels: u32,

        /// Number of tours per travel
        #[arg(long, default_value_t = 20)]
        tours: u32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Travels => list_travels(&pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Seed {
            travels,
            tours,
            yes,
        } => seed(&pool, travels, tours, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

#[derive(FromRow)]
struct TravelSummary {
    id: i64,
    slug: String,
    name: String,
    number_of_days: i32,
    is_public: bool,
    tours: i64,
}

/// Lists every travel, including private ones.
///
/// # Output Format
///
/// ```text
/// 🧭 Travels
///
///   ID   Slug                           Days  Tours  Visibility
///   ──────────────────────────────────────────────────────────────────
///   1    jordan-360                     8     12     PUBLIC
///   2    iceland-northern-lights        5     0      PRIVATE
/// ```
async fn list_travels(pool: &PgPool) -> Result<()> {
    println!("{}", "🧭 Travels".bright_blue().bold());
    println!();

    let travels: Vec<TravelSummary> = sqlx::query_as(
        r#"
        SELECT t.id, t.slug, t.name, t.number_of_days, t.is_public,
               COUNT(tr.id) AS tours
        FROM travels t
        LEFT JOIN tours tr ON tr.travel_id = t.id
        GROUP BY t.id
        ORDER BY t.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    if travels.is_empty() {
        println!("{}", "  No travels found".yellow());
        println!();
        println!(
            "  Create some with: {} admin seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<5} {:<6} {}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Days".bright_white().bold(),
        "Tours".bright_white().bold(),
        "Visibility".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for travel in &travels {
        let visibility = if travel.is_public {
            "PUBLIC".green()
        } else {
            "PRIVATE".red()
        };

        println!(
            "  {:<4} {:<30} {:<5} {:<6} {}",
            travel.id.to_string().bright_black(),
            travel.slug.cyan(),
            travel.number_of_days,
            travel.tours,
            visibility
        );
        println!("       {}", travel.name.bright_black());
    }

    println!();
    println!(
        "  Total: {}",
        travels.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays catalogue statistics.
///
/// Shows:
/// - Total number of travels
/// - Number of public travels
/// - Total number of tours
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let travels_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM travels")
        .fetch_one(pool)
        .await?;

    let public_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM travels WHERE is_public = TRUE")
            .fetch_one(pool)
            .await?;

    let tours_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tours")
        .fetch_one(pool)
        .await?;

    println!(
        "  Travels:        {}",
        travels_count.to_string().bright_green().bold()
    );
    println!(
        "  Public travels: {}",
        public_count.to_string().bright_green().bold()
    );
    println!(
        "  Tours:          {}",
        tours_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

const DESTINATIONS: &[&str] = &[
    "Jordan",
    "Iceland",
    "Morocco",
    "Patagonia",
    "Japan",
    "Norway",
    "Peru",
    "Vietnam",
    "Scotland",
    "Namibia",
];

const THEMES: &[&str] = &[
    "360",
    "Northern Lights",
    "Desert Nights",
    "Coast to Coast",
    "Hidden Trails",
    "Food Tour",
    "Wild Camping",
];

/// Generated travel together with its tours, built before any database work.
struct SeedTravel {
    travel: NewTravel,
    tours: Vec<SeedTour>,
}

struct SeedTour {
    name: String,
    price: Price,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Builds random demo data.
///
/// Travels are public four times out of five. Tour prices are whole amounts
/// with random cents; start dates fall within the next year and each tour
/// lasts exactly the travel's number of days.
fn generate_seed(travels: u32, tours: u32, today: NaiveDate) -> Vec<SeedTravel> {
    let mut rng = rand::rng();

    (0..travels)
        .map(|_| {
            let destination = DESTINATIONS.choose(&mut rng).copied().unwrap_or("Jordan");
            let theme = THEMES.choose(&mut rng).copied().unwrap_or("360");
            let number_of_days: i32 = rng.random_range(2..=14);

            let travel = NewTravel {
                name: format!("{destination} {theme}"),
                description: format!("{number_of_days} days exploring {destination}."),
                number_of_days,
                is_public: rng.random_bool(0.8),
            };

            let tours = (0..tours)
                .map(|_| {
                    let start_date = today + Days::new(rng.random_range(1..=365));
                    let end_date = start_date + Days::new((number_of_days - 1) as u64);
                    let price = Price::from_minor(
                        rng.random_range(200..=5000) * 100 + rng.random_range(0..100),
                    );

                    SeedTour {
                        name: format!(
                            "{}{}",
                            destination.to_uppercase(),
                            start_date.format("%Y%m%d")
                        ),
                        price,
                        start_date,
                        end_date,
                    }
                })
                .collect();

            SeedTravel { travel, tours }
        })
        .collect()
}

/// Inserts demo travels and tours after confirmation.
///
/// Slugs are derived from travel names; duplicates get numeric suffixes.
async fn seed(pool: &PgPool, travels: u32, tours: u32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed demo data".bright_blue().bold());
    println!();
    println!("  Travels:            {}", travels.to_string().cyan());
    println!("  Tours per travel:   {}", tours.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert this data?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());
    let travel_repo = PgTravelRepository::new(pool.clone());
    let tour_repo = PgTourRepository::new(pool);

    let data = generate_seed(travels, tours, Utc::now().date_naive());

    for item in data {
        let travel = travel_repo
            .create(item.travel)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create travel: {}", e))?;

        for tour in item.tours {
            tour_repo
                .create(NewTour {
                    travel_id: travel.id,
                    name: tour.name,
                    price: tour.price,
                    start_date: tour.start_date,
                    end_date: tour.end_date,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create tour: {}", e))?;
        }

        let visibility = if travel.is_public {
            "public".green()
        } else {
            "private".red()
        };
        println!("  + {} ({})", travel.slug.as_str().cyan(), visibility);
    }

    println!();
    println!("{}", "✅ Seed completed".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seed_shapes() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let data = generate_seed(3, 4, today);

        assert_eq!(data.len(), 3);
        for item in &data {
            assert_eq!(item.tours.len(), 4);
            assert!((2..=14).contains(&item.travel.number_of_days));

            for tour in &item.tours {
                assert!(tour.start_date > today);
                let days = (tour.end_date - tour.start_date).num_days() + 1;
                assert_eq!(days, item.travel.number_of_days as i64);
                assert!(tour.price.minor_units() >= 20_000);
            }
        }
    }
}
