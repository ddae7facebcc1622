//! Typed game endpoints

use super::error::ClientError;
use super::AuthenticatedMorpionClient;
use crate::types::{Game, PlayRequest};

impl AuthenticatedMorpionClient {
    /// List the games visible to the current player
    pub async fn list_games(&self) -> Result<Vec<Game>, ClientError> {
        let request = self.request(reqwest::Method::GET, "/api/games");
        self.execute(request).await
    }

    /// Create a new game and wait for an opponent
    pub async fn create_game(&self) -> Result<Game, ClientError> {
        let request = self.request(reqwest::Method::POST, "/api/games");
        self.execute(request).await
    }

    /// Fetch a single game by id
    pub async fn get_game(&self, id: &str) -> Result<Game, ClientError> {
        let request = self.request(reqwest::Method::GET, &format!("/api/games/{id}"));
        self.execute(request).await
    }

    /// Join an existing game as the second player
    pub async fn join_game(&self, id: &str) -> Result<Game, ClientError> {
        let request = self.request(reqwest::Method::POST, &format!("/api/games/{id}/join"));
        self.execute(request).await
    }

    /// Submit a move; the server validates it and returns the updated game
    pub async fn play(&self, id: &str, request: PlayRequest) -> Result<Game, ClientError> {
        let request = self
            .request(reqwest::Method::POST, &format!("/api/games/{id}/play"))
            .json(&request);
        self.execute(request).await
    }
}
