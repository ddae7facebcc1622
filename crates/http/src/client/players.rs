//! Typed player endpoints

use super::error::ClientError;
use super::{AuthenticatedMorpionClient, PublicMorpionClient};
use crate::types::{CreatePlayerRequest, Player};

impl PublicMorpionClient {
    /// Register a new player; the response carries the session API key
    pub async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<Player, ClientError> {
        let request = self
            .request(reqwest::Method::POST, "/api/players")
            .json(&request);
        self.execute(request).await
    }
}

impl AuthenticatedMorpionClient {
    /// Fetch the profile of the player owning the API key
    pub async fn profile(&self) -> Result<Player, ClientError> {
        let request = self.request(reqwest::Method::GET, "/api/player");
        self.execute(request).await
    }
}
