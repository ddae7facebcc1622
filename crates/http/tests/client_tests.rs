//! Integration tests for the morpion HTTP client

use morpion_http::client::error::ClientError;
use morpion_http::types::{CreatePlayerRequest, GameStatus, PlayRequest};
use morpion_http::TypedClientBuilder;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = TypedClientBuilder::new().build_authenticated("test-key");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_public()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_register_player_returns_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/players"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "alice"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "p1",
            "name": "alice",
            "api_key": "secret-key"
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let player = client
        .create_player(CreatePlayerRequest {
            name: "alice".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(player.name, "alice");
    assert_eq!(player.api_key.as_deref(), Some("secret-key"));
}

#[tokio::test]
async fn test_authenticated_requests_send_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/player"))
        .and(header("authorization", "key=test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "name": "alice"
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("test-api-key")
        .unwrap();

    let player = client.profile().await.unwrap();
    assert_eq!(player.id, "p1");
    assert!(player.api_key.is_none());
}

#[tokio::test]
async fn test_play_posts_position() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/games/g1/play"))
        .and(header("authorization", "key=test-api-key"))
        .and(body_json(json!({"position": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "g1",
            "status": "in_progress",
            "players": [],
            "cells": [null, null, null, null, "X", null, null, null, null]
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("test-api-key")
        .unwrap();

    let game = client.play("g1", PlayRequest { position: 4 }).await.unwrap();
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.cells[4].as_deref(), Some("X"));
}

#[tokio::test]
async fn test_rejected_key_maps_to_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/player"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid key"})),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("stale-key")
        .unwrap();

    let result = client.profile().await;
    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert!(err.is_auth_expired());
    assert_eq!(err.messages("default"), vec!["invalid key"]);
}

#[tokio::test]
async fn test_validation_errors_flatten_through_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/players"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": {"name": ["name is required", "name is too short"]}
        })))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let result = client
        .create_player(CreatePlayerRequest {
            name: String::new(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(_)));
    assert_eq!(
        err.messages("default"),
        vec!["name is required", "name is too short"]
    );
}

#[tokio::test]
async fn test_unexpected_status_keeps_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("test-api-key")
        .unwrap();

    let result = client.list_games().await;
    match result.unwrap_err() {
        ClientError::ServerError { status, .. } => assert_eq!(status, 503),
        other => panic!("unexpected error: {other:?}"),
    }
}
