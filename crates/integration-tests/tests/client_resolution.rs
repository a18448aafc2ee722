//! Integration tests for memoized fetches and link resolution over HTTP.
//!
//! Every mock declares how many requests it expects; the server verifies the
//! counts when it is dropped at the end of each test.
//!
//! Run with: cargo test -p pokeapi-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pokeapi_client::{CatalogError, Link, ResourceKind, TransportError};
use pokeapi_integration_tests::{
    berry, berry_firmness, client_for, named_link, serve, serve_status,
};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_repeated_fetch_hits_catalog_once() {
    let server = MockServer::start().await;
    let style = json!({"id": 1, "name": "a", "names": []});
    serve(&server, "move-battle-style/1", &style, 1).await;
    let client = client_for(&server);

    let first = client.get_move_battle_style(1).await.unwrap().unwrap();
    let second = client.get_move_battle_style(1).await.unwrap().unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(first.name, "a");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_record_is_cached_absence() {
    let server = MockServer::start().await;
    serve_status(&server, "pokemon/99999", 404, 1).await;
    let client = client_for(&server);

    assert!(client.get_pokemon(99999).await.unwrap().is_none());
    assert!(client.get_pokemon(99999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_propagates_and_is_retried() {
    let server = MockServer::start().await;
    serve_status(&server, "berry/3", 503, 2).await;
    let client = client_for(&server);

    for _ in 0..2 {
        let err = client.get_berry(3).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Transport(TransportError::Status { status: 503, .. })
        ));
    }
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_follow_links_between_records() {
    let server = MockServer::start().await;
    let cheri = berry(&server, 1, "cheri");
    let firmness = berry_firmness(
        &server,
        2,
        "soft",
        &[named_link(&server, "berry", "cheri", 1)],
    );
    serve(&server, "berry/1", &cheri, 1).await;
    serve(&server, "berry-firmness/2", &firmness, 1).await;
    let client = client_for(&server);

    let berry = client.get_berry(1).await.unwrap().unwrap();
    assert_eq!(berry.firmness.kind().unwrap(), "berry-firmness");

    let soft = client.resolve(&berry.firmness).await.unwrap().unwrap();
    assert_eq!(soft.name, "soft");

    // Back to the berry: answered from the cache.
    let again = client.resolve(&soft.berries[0]).await.unwrap().unwrap();
    assert_eq!(again, berry);

    // Resolving the same link twice costs nothing extra.
    client.resolve(&berry.firmness).await.unwrap();
}

#[tokio::test]
async fn test_resolve_address_through_registry() {
    let server = MockServer::start().await;
    serve(&server, "berry/7", &berry(&server, 7, "rawst"), 1).await;
    let client = client_for(&server);

    let record = client
        .resolve_address(&format!("{}/berry/7/", server.uri()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.kind(), ResourceKind::Berry);
}

#[tokio::test]
async fn test_unregistered_kind_never_reaches_catalog() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .resolve_address(&format!("{}/widget/7/", server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_fatal());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pokemon_encounters() {
    let server = MockServer::start().await;
    let encounters = json!([{
        "location_area": named_link(&server, "location-area", "viridian-forest-area", 321),
        "version_details": [{
            "max_chance": 5,
            "version": named_link(&server, "version", "yellow", 3),
            "encounter_details": [{
                "min_level": 3,
                "max_level": 5,
                "chance": 5,
                "condition_values": [],
                "method": named_link(&server, "encounter-method", "walk", 1)
            }]
        }]
    }]);
    serve(&server, "pokemon/25/encounters", &encounters, 1).await;
    let client = client_for(&server);

    let first = client.get_pokemon_encounters(25).await.unwrap();
    let second = client.get_pokemon_encounters(25).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].location_area.label(), "viridian-forest-area");
    assert_eq!(first[0].version_details[0].encounter_details[0].chance, 5);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_request() {
    let server = MockServer::start().await;
    serve(&server, "berry/1", &berry(&server, 1, "cheri"), 1).await;
    let client = client_for(&server);

    let (a, b) = tokio::join!(client.get_berry(1), client.get_berry(1));

    assert_eq!(a.unwrap(), b.unwrap());
}

#[tokio::test]
async fn test_deeply_nested_evolution_chain() {
    let server = MockServer::start().await;
    let stages = 70;
    let mut chain = json!({
        "is_baby": false,
        "species": named_link(&server, "pokemon-species", "stage-70", 70),
        "evolution_details": [],
        "evolves_to": []
    });
    for n in (1..stages).rev() {
        chain = json!({
            "is_baby": false,
            "species": named_link(&server, "pokemon-species", &format!("stage-{n}"), n),
            "evolution_details": [],
            "evolves_to": [chain]
        });
    }
    serve(&server, "evolution-chain/1", &json!({"id": 1, "chain": chain}), 1).await;
    let client = client_for(&server);

    let fetched = client.get_evolution_chain(1).await.unwrap().unwrap();

    assert_eq!(fetched.chain.depth(), 70);
    assert_eq!(fetched.chain.species.label(), "stage-1");
}

#[tokio::test]
async fn test_encounters_address_is_not_a_record_address() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .resolve_address(&format!("{}/pokemon/1/encounters", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::UnregisteredKind(ref kind) if kind == "1"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
