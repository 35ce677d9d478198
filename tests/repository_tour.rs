mod common;

use sqlx::PgPool;
use std::sync::Arc;
use travel_api::domain::entities::{NewTour, Price};
use travel_api::domain::pagination::PageRequest;
use travel_api::domain::query::{SortOrder, TourQuery, TourSort, TourSortField};
use travel_api::domain::repositories::TourRepository;
use travel_api::infrastructure::persistence::PgTourRepository;

#[sqlx::test]
async fn test_create_tour_stores_minor_units(pool: PgPool) {
    let travel = common::create_public_travel(&pool, "Jordan 360").await;
    let repo = PgTourRepository::new(Arc::new(pool.clone()));

    let tour = repo
        .create(NewTour {
            travel_id: travel.id,
            name: "JOR20260301".to_string(),
            price: Price::from_minor(12545),
            start_date: common::date("2026-03-01"),
            end_date: common::date("2026-03-05"),
        })
        .await
        .unwrap();

    assert_eq!(tour.travel_id, travel.id);
    assert_eq!(tour.price.to_string(), "125.45");

    let stored: i64 = sqlx::query_scalar("SELECT price FROM tours WHERE id = $1")
        .bind(tour.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 12545);
}

#[sqlx::test]
async fn test_list_combines_filters_and_sort(pool: PgPool) {
    let travel = common::create_public_travel(&pool, "Jordan 360").await;
    common::create_tour(&pool, &travel, "80", "2026-03-01").await;
    common::create_tour(&pool, &travel, "120", "2026-03-10").await;
    common::create_tour(&pool, &travel, "150", "2026-04-01").await;
    common::create_tour(&pool, &travel, "110", "2026-05-01").await;

    let repo = PgTourRepository::new(Arc::new(pool));
    let query = TourQuery::new()
        .with_price_range(Some(Price::from_minor(10000)), Some(Price::from_minor(15000)))
        .with_date_range(Some(common::date("2026-03-05")), Some(common::date("2026-04-30")))
        .with_sort(Some(TourSort::new(TourSortField::Price, SortOrder::Desc)));

    let page = repo
        .list_for_travel(travel.id, &query, PageRequest::first())
        .await
        .unwrap();

    let prices: Vec<i64> = page.items.iter().map(|t| t.price.minor_units()).collect();
    assert_eq!(prices, vec![15000, 12000]);
    assert_eq!(page.total, 2);
}

#[sqlx::test]
async fn test_list_second_page(pool: PgPool) {
    let travel = common::create_public_travel(&pool, "Jordan 360").await;
    for day in 1..=20 {
        common::create_tour(&pool, &travel, "100", &format!("2026-03-{day:02}")).await;
    }

    let repo = PgTourRepository::new(Arc::new(pool));

    let page = repo
        .list_for_travel(travel.id, &TourQuery::new(), PageRequest::new(2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total, 20);
    assert_eq!(page.last_page(), 2);
    assert_eq!(page.items[0].start_date, common::date("2026-03-16"));
}

#[sqlx::test]
async fn test_tours_are_removed_with_their_travel(pool: PgPool) {
    let travel = common::create_public_travel(&pool, "Jordan 360").await;
    common::create_tour(&pool, &travel, "100", "2026-03-01").await;

    sqlx::query("DELETE FROM travels WHERE id = $1")
        .bind(travel.id)
        .execute(&pool)
        .await
        .unwrap();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tours")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
