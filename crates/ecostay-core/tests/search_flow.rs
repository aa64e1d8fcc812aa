use std::sync::Arc;
use std::time::Duration;

use ecostay_core::search::SearchOutcome;
use ecostay_core::{
    Coordinate, HttpRecommendationClient, LocationPicker, PointerTarget, RecommendationClient,
    SearchOrchestrator, UiPhase, ViewController,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::mpsc::unbounded_channel;

const DEFAULT_QUERY: &str = "I want a quiet hotel with great Wi-Fi";

fn controller() -> ViewController {
    ViewController::new(
        SearchOrchestrator::new(DEFAULT_QUERY, 4, Duration::from_millis(20)),
        LocationPicker::default(),
    )
}

fn client_for(server: &MockServer) -> Arc<dyn RecommendationClient> {
    Arc::new(
        HttpRecommendationClient::new(server.url("/recommend"), Duration::from_secs(5))
            .expect("client"),
    )
}

fn filled(stars: &[ecostay_core::Star]) -> usize {
    stars.iter().filter(|s| s.is_filled()).count()
}

#[tokio::test]
async fn submitting_defaults_shows_two_cards() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/recommend").json_body(json!({
                "user_query": DEFAULT_QUERY,
                "user_lat": 48.8566,
                "user_lng": 2.3522,
                "top_n": 4
            }));
            then.status(200).json_body(json!({
                "recommendations": [
                    {
                        "Name": "Hotel Lumière",
                        "Rating": 8.6,
                        "HotelLink": "https://example.com/lumiere",
                        "address": "1 Rue de Rivoli",
                        "description": "Quiet rooms.\nFast Wi-Fi.",
                        "images_parsed": ["l1.jpg", "l2.jpg", "l3.jpg"]
                    },
                    {
                        "Name": "Le Petit Nid",
                        "Rating": 6.0,
                        "HotelLink": "https://example.com/nid",
                        "address": "9 Rue Oberkampf",
                        "description": "Cosy."
                    }
                ]
            }));
        })
        .await;

    let mut view = controller();
    assert_eq!(view.phase(), UiPhase::Hero);

    let (tx, mut rx) = unbounded_channel();
    view.submit(client_for(&server), tx);
    assert_eq!(view.phase(), UiPhase::Pending);

    let completion = rx.recv().await.expect("completion");
    assert!(view.complete(completion));
    mock.assert_async().await;

    assert_eq!(view.phase(), UiPhase::Results);
    let cards = view.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].hotel.name, "Hotel Lumière");
    assert_eq!(filled(&cards[0].stars), 4);
    assert_eq!(cards[0].thumbnail(), Some("l1.jpg"));
    assert_eq!(filled(&cards[1].stars), 3);
    assert_eq!(cards[1].thumbnail(), None);

    assert!(view.open_detail(0));
    view.pointer(PointerTarget::CarouselPrevious);
    let detail = view.detail().expect("detail open");
    assert_eq!(detail.carousel.index(), 2);
    assert_eq!(detail.hotel.description, "Quiet rooms.\nFast Wi-Fi.");
}

#[tokio::test]
async fn map_click_is_sent_with_next_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/recommend").json_body(json!({
                "user_query": DEFAULT_QUERY,
                "user_lat": 45.0,
                "user_lng": 1.0,
                "top_n": 4
            }));
            then.status(200).json_body(json!({ "recommendations": [] }));
        })
        .await;

    let mut view = controller();
    view.open_location_picker();
    view.pointer(PointerTarget::Map(Coordinate::new(45.0, 1.0)));
    view.close_location_picker();

    let (tx, mut rx) = unbounded_channel();
    view.submit(client_for(&server), tx);
    let completion = rx.recv().await.expect("completion");
    view.complete(completion);

    mock.assert_async().await;
    assert_eq!(view.phase(), UiPhase::Results);
}

#[tokio::test]
async fn failed_request_publishes_empty_results() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/recommend");
            then.status(502).body("bad gateway");
        })
        .await;

    let mut view = controller();
    let (tx, mut rx) = unbounded_channel();
    view.submit(client_for(&server), tx);

    let completion = rx.recv().await.expect("completion");
    assert_eq!(completion.outcome, SearchOutcome::Failed);
    view.complete(completion);

    assert_eq!(view.phase(), UiPhase::Results);
    assert!(view.cards().is_empty());
}

#[tokio::test]
async fn unreachable_backend_still_reaches_results() {
    let client: Arc<dyn RecommendationClient> = Arc::new(
        HttpRecommendationClient::new("http://127.0.0.1:9/recommend", Duration::from_secs(2))
            .expect("client"),
    );
    let mut view = controller();
    let (tx, mut rx) = unbounded_channel();
    view.submit(client, tx);

    let completion = rx.recv().await.expect("completion");
    view.complete(completion);
    assert_eq!(view.phase(), UiPhase::Results);
    assert!(view.search().recommendations().is_empty());
}

#[tokio::test]
async fn only_latest_submission_is_published() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/recommend");
            then.status(200)
                .json_body(json!({ "recommendations": [{ "Name": "Only", "Rating": 10 }] }));
        })
        .await;

    let mut view = controller();
    let client = client_for(&server);
    let (tx, mut rx) = unbounded_channel();
    view.submit(client.clone(), tx.clone());
    view.submit(client, tx);

    let mut published = 0;
    for _ in 0..2 {
        let completion = rx.recv().await.expect("completion");
        if view.complete(completion) {
            published += 1;
        }
    }
    assert_eq!(published, 1);
    assert_eq!(view.search().generation(), 2);
    assert_eq!(view.cards().len(), 1);
}
