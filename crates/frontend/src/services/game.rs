//! Game API service

use crate::client::require_authenticated_client;
use morpion_http::types::{Game, PlayRequest};
use morpion_http::ClientError;

/// Game API service
#[derive(Clone)]
pub struct GameApiService;

impl GameApiService {
    /// Create a new game service
    pub fn new() -> Self {
        Self
    }

    /// List the games visible to the current player
    pub async fn list(&self) -> Result<Vec<Game>, ClientError> {
        let client = require_authenticated_client()?;
        client.list_games().await
    }

    /// Create a new game and wait for an opponent
    pub async fn create(&self) -> Result<Game, ClientError> {
        let client = require_authenticated_client()?;
        client.create_game().await
    }

    /// Fetch a single game by id
    pub async fn get(&self, id: &str) -> Result<Game, ClientError> {
        let client = require_authenticated_client()?;
        client.get_game(id).await
    }

    /// Join an existing game as the second player
    pub async fn join(&self, id: &str) -> Result<Game, ClientError> {
        let client = require_authenticated_client()?;
        client.join_game(id).await
    }

    /// Submit a move; the server owns the rules and returns the updated game
    pub async fn play(&self, id: &str, position: usize) -> Result<Game, ClientError> {
        let client = require_authenticated_client()?;
        client.play(id, PlayRequest { position }).await
    }
}

impl Default for GameApiService {
    fn default() -> Self {
        Self::new()
    }
}
