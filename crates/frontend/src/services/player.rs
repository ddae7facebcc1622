//! Player API service

use crate::client::{create_public_client, require_authenticated_client};
use crate::config::ApiConfig;
use morpion_http::types::{CreatePlayerRequest, Player};
use morpion_http::{ClientError, TypedClientBuilder};

/// Player API service
#[derive(Clone)]
pub struct PlayerApiService;

impl PlayerApiService {
    /// Create a new player service
    pub fn new() -> Self {
        Self
    }

    /// Register a new player; the response carries the session API key
    pub async fn register(&self, name: String) -> Result<Player, ClientError> {
        let client = create_public_client()?;
        client.create_player(CreatePlayerRequest { name }).await
    }

    /// Validate a pasted API key by fetching the profile it belongs to.
    ///
    /// Uses a throwaway client so a bad key does not tear down the session.
    pub async fn verify_key(&self, api_key: &str) -> Result<Player, ClientError> {
        let client = TypedClientBuilder::new()
            .base_url(ApiConfig::BASE_URL)
            .build_authenticated(api_key)?;
        client.profile().await
    }

    /// Profile of the currently logged-in player
    pub async fn profile(&self) -> Result<Player, ClientError> {
        let client = require_authenticated_client()?;
        client.profile().await
    }
}

impl Default for PlayerApiService {
    fn default() -> Self {
        Self::new()
    }
}
