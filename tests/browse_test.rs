/// Screen state: loading indication and the stale-response guard
///
/// Tests cover:
/// - Loading state while a request is in flight
/// - Out-of-order responses never overwrite newer state
/// - Genre list cached after the first successful load
mod utils;

use quickbet_lib::{
    modules::{
        browse::ListingSource,
        catalog::{Category, Genre},
    },
    shared::{application::LoadState, storage::MemoryStorage},
};
use std::sync::Arc;
use std::time::Duration;
use utils::{
    factories::TitleFactory,
    helpers::{self, DelayedCatalog, MockCatalog},
};

// ================================================================================================
// LISTING TESTS
// ================================================================================================

#[tokio::test]
async fn stale_search_response_is_discarded() {
    let catalog = DelayedCatalog::new()
        .search_result("slow", 200, vec![TitleFactory::new(1).title("Slow Result").build()])
        .search_result("fast", 0, vec![TitleFactory::new(2).title("Fast Result").build()]);
    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    let listing = Arc::clone(&services.listing);

    let (slow_applied, fast_applied) = tokio::join!(listing.search("slow"), async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        listing.search("fast").await
    });

    assert!(!slow_applied);
    assert!(fast_applied);

    let state = listing.state().await;
    assert_eq!(state.source, Some(ListingSource::Search("fast".to_string())));
    let titles = state.titles.loaded().unwrap();
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].title, "Fast Result");
}

#[tokio::test]
async fn listing_shows_loading_while_in_flight() {
    let catalog = DelayedCatalog::new()
        .search_result("slow", 200, vec![TitleFactory::new(1).build()]);
    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    let listing = Arc::clone(&services.listing);
    assert_eq!(listing.state().await.titles, LoadState::Idle);

    let in_flight = tokio::spawn({
        let listing = Arc::clone(&listing);
        async move { listing.search("slow").await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(listing.state().await.titles.is_loading());
    assert!(listing.cards().await.is_loading());

    assert!(in_flight.await.unwrap());
    assert!(listing.state().await.titles.loaded().is_some());
}

#[tokio::test]
async fn no_results_settle_as_empty() {
    let services = helpers::build_test_services(DelayedCatalog::new(), Arc::new(MemoryStorage::new()));

    assert!(services.listing.search("nothing matches").await);
    assert_eq!(services.listing.state().await.titles, LoadState::Empty);

    assert!(services.listing.search("   ").await);
    assert_eq!(services.listing.cards().await, LoadState::Empty);
}

#[tokio::test]
async fn genre_filter_replaces_category_listing() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_by_category()
        .returning(|_| Ok(vec![TitleFactory::new(1).build()]));
    catalog
        .expect_list_by_genre()
        .withf(|genre_id| *genre_id == 28)
        .returning(|_| Ok(vec![TitleFactory::new(2).genre(28, "Action").build()]));

    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    services.listing.show_category(Category::Popular).await;
    services.listing.filter_by_genre(28).await;

    let state = services.listing.state().await;
    assert_eq!(state.source, Some(ListingSource::Genre(28)));
    assert_eq!(state.titles.loaded().unwrap()[0].genre_ids, vec![28]);
}

#[tokio::test]
async fn genres_are_fetched_once() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_genres()
        .times(1)
        .returning(|| Ok(vec![Genre::new(28, "Action"), Genre::new(18, "Drama")]));

    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    let first = services.listing.genres().await;
    let second = services.listing.genres().await;

    assert_eq!(first, second);
    assert_eq!(first.loaded().unwrap().len(), 2);
}

// ================================================================================================
// DETAIL TESTS
// ================================================================================================

#[tokio::test]
async fn stale_detail_response_is_discarded() {
    let catalog = DelayedCatalog::new()
        .detail(TitleFactory::new(1).title("First").build_detail(), 200)
        .detail(TitleFactory::new(2).title("Second").build_detail(), 0);
    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    let detail = Arc::clone(&services.detail);

    let (first_applied, second_applied) = tokio::join!(detail.open(1), async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        detail.open(2).await
    });

    assert!(!first_applied);
    assert!(second_applied);
    assert_eq!(detail.state().await.loaded().unwrap().title, "Second");
}

#[tokio::test]
async fn detail_view_formats_labels() {
    let catalog = DelayedCatalog::new().detail(
        TitleFactory::new(361743)
            .title("Top Gun: Maverick")
            .genre(28, "Action")
            .build_detail(),
        0,
    );
    let services = helpers::build_test_services(catalog, Arc::new(MemoryStorage::new()));
    services.detail.open(361743).await;

    let view = services.detail.view().await;
    let view = view.loaded().unwrap();
    assert_eq!(view.runtime.as_deref(), Some("2h 11min"));
    assert_eq!(view.release_date, "5/24/2022");
    assert_eq!(view.genres, vec!["Action".to_string()]);
    assert_eq!(
        view.trailer_url.as_deref(),
        Some("https://www.youtube.com/watch?v=trailer-361743")
    );
}

#[tokio::test]
async fn unknown_title_settles_as_empty() {
    let services = helpers::build_test_services(DelayedCatalog::new(), Arc::new(MemoryStorage::new()));

    assert!(services.detail.open(404).await);
    assert_eq!(services.detail.state().await, LoadState::Empty);
    assert_eq!(services.detail.toggle_favorite().await, None);
}
