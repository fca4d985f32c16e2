//! Integration tests for the endpoint wrappers, using a recording mock
//! transport in place of the HTTP collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use riftline::client::{Platform, Region, RiotClient, Transport};
use riftline::config::RateLimitConfig;
use riftline::core::ApiError;
use serde_json::{json, Value};

/// Transport that records every URL and serves canned responses.
struct MockTransport {
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.calls.lock().push(url.to_owned());
        if url.contains("missing") {
            return Err(ApiError::Status(404));
        }
        Ok(json!({ "url": url }))
    }
}

fn client_with_mock() -> (RiotClient<MockTransport>, Arc<Mutex<Vec<String>>>) {
    let (transport, calls) = MockTransport::new();
    // Trailing slash on the base URL must not produce a double slash.
    let client = RiotClient::new(transport, "https://proxy.test/", &RateLimitConfig::default());
    (client, calls)
}

#[tokio::test]
async fn wrappers_build_expected_urls() {
    let (client, calls) = client_with_mock();

    client
        .account_by_riot_id(Platform::Europe, "Faker", "KR1")
        .await
        .unwrap();
    client
        .account_by_puuid(Platform::Americas, "puuid-1")
        .await
        .unwrap();
    client
        .summoner_by_puuid(Region::Euw1, "puuid-1")
        .await
        .unwrap();
    client.ranked_entries(Region::Kr, "summ-1").await.unwrap();
    client
        .match_ids(Platform::Europe, "puuid-1", 0, 20)
        .await
        .unwrap();
    client
        .match_detail(Platform::Europe, "EUW1_1234")
        .await
        .unwrap();
    client.active_game(Region::Euw1, "puuid-1").await.unwrap();
    client.champion_by_id(157).await.unwrap();

    let calls = calls.lock();
    assert_eq!(
        *calls,
        vec![
            "https://proxy.test/account/europe/Faker/KR1",
            "https://proxy.test/account/by-puuid/americas/puuid-1",
            "https://proxy.test/summoner/euw1/puuid-1",
            "https://proxy.test/ranked/kr/summ-1",
            "https://proxy.test/matches/europe/puuid-1?start=0&count=20",
            "https://proxy.test/match/europe/EUW1_1234",
            "https://proxy.test/spectator/active-games/by-summoner/euw1/puuid-1",
            "https://proxy.test/champion/157",
        ]
    );
}

#[tokio::test]
async fn non_2xx_surfaces_as_status_error() {
    let (client, _calls) = client_with_mock();

    let err = client
        .summoner_by_puuid(Region::Na1, "missing-puuid")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status(404)));

    // The failed call left the queue healthy for the next one.
    let ok = client.summoner_by_puuid(Region::Na1, "puuid-2").await;
    assert!(ok.is_ok());
    assert_eq!(client.pending_requests(), 0);
}

#[tokio::test]
async fn cloned_clients_share_one_queue() {
    let (client, calls) = client_with_mock();
    let other = client.clone();

    client.champion_by_id(1).await.unwrap();
    other.champion_by_id(2).await.unwrap();

    assert_eq!(calls.lock().len(), 2);
    assert_eq!(client.pending_requests(), 0);
    assert_eq!(other.pending_requests(), 0);
}

#[tokio::test]
async fn responses_decode_as_json_values() {
    let (client, _calls) = client_with_mock();

    let body = client.match_detail(Platform::Asia, "KR_42").await.unwrap();
    assert_eq!(body["url"], "https://proxy.test/match/asia/KR_42");
}
