//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Static
//! statements use `query_as` with bound parameters; tour listings are
//! assembled with [`sqlx::QueryBuilder`] because their predicates are
//! optional.
//!
//! # Repositories
//!
//! - [`PgTravelRepository`] - Travel listing, slug lookup and creation
//! - [`PgTourRepository`] - Filtered and paginated tour listing

pub mod pg_tour_repository;
pub mod pg_travel_repository;

pub use pg_tour_repository::PgTourRepository;
pub use pg_travel_repository::PgTravelRepository;
