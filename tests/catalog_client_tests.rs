// Tests for the typed consumer of the relay contract

use mockito::Server;
use pokedex_relay::core::presentation::{dex_number, height_meters, type_color, weight_kilograms};
use pokedex_relay::core::{filter_listing, ViewState};
use pokedex_relay::services::catalog::{CatalogClient, CatalogError, DETAIL_FAILED, LISTING_FAILED};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &Server) -> CatalogClient {
    CatalogClient::new(server.url(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_listing_loads_and_filters() {
    let mut server = Server::new_async().await;
    let _relay = server
        .mock("GET", "/api/pokemons")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"},
                {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let state = client_for(&server).load_listing().await;
    let entries = state.loaded().expect("listing should load");
    assert_eq!(entries.len(), 3);

    let names: Vec<_> = filter_listing(entries, "Saur").into_iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "venusaur"]);
}

#[tokio::test]
async fn test_listing_failure_uses_view_message() {
    let mut server = Server::new_async().await;
    let _relay = server
        .mock("GET", "/api/pokemons")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(json!({"message": "Network error", "error": "Unable to connect to pokemon service"}).to_string())
        .create_async()
        .await;

    let state = client_for(&server).load_listing().await;
    assert_eq!(state, ViewState::Failed(LISTING_FAILED.to_string()));
}

#[tokio::test]
async fn test_detail_loads_typed_record() {
    let mut server = Server::new_async().await;
    let _relay = server
        .mock("GET", "/api/pokemon/charizard")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 6,
                "name": "charizard",
                "height": 17,
                "weight": 905,
                "abilities": [
                    {"ability": {"name": "blaze", "url": "u1"}, "is_hidden": false},
                    {"ability": {"name": "solar-power", "url": "u2"}, "is_hidden": true}
                ],
                "types": [
                    {"slot": 1, "type": {"name": "fire", "url": "t1"}},
                    {"slot": 2, "type": {"name": "flying", "url": "t2"}}
                ],
                "stats": [{"base_stat": 109, "effort": 3, "stat": {"name": "special-attack", "url": "s4"}}],
                "sprites": {"front_default": "front.png", "front_shiny": null, "back_default": "back.png"},
                "order": 7
            })
            .to_string(),
        )
        .create_async()
        .await;

    let state = client_for(&server).load_detail("charizard").await;
    let record = state.loaded().expect("detail should load");

    assert_eq!(dex_number(record.id), "#006");
    assert_eq!(height_meters(record.height), "1.7 m");
    assert_eq!(weight_kilograms(record.weight), "90.5 kg");
    assert_eq!(record.type_names().map(type_color).collect::<Vec<_>>(), vec!["#FF5733", "#AED6F1"]);
    assert_eq!(record.hidden_abilities().collect::<Vec<_>>(), vec!["solar-power"]);
    assert!(!record.sprites.has_shiny());
    assert_eq!(record.sprites.front(true), "front.png");
    assert_eq!(record.sprites.back_default.as_deref(), Some("back.png"));
}

#[tokio::test]
async fn test_detail_not_found_shows_view_message() {
    let mut server = Server::new_async().await;
    let _relay = server
        .mock("GET", "/api/pokemon/missingno")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"message": "Pokemon not found", "error": "No pokemon found with name: missingno"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    match client.fetch_detail("missingno").await {
        Err(CatalogError::Status { status, message, error }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Pokemon not found");
            assert_eq!(error.as_deref(), Some("No pokemon found with name: missingno"));
        }
        other => panic!("expected a 404 status error, got {:?}", other),
    }

    let state = client.load_detail("missingno").await;
    assert_eq!(state.error(), Some(DETAIL_FAILED));
}

#[tokio::test]
async fn test_detail_without_error_body_uses_fallback() {
    let mut server = Server::new_async().await;
    let _relay = server
        .mock("GET", "/api/pokemon/pikachu")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let state = client_for(&server).load_detail("pikachu").await;
    assert_eq!(state.error(), Some(DETAIL_FAILED));
}
