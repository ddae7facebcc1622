//! Wrapped client that handles auth errors automatically

use morpion_http::types::{Game, PlayRequest, Player};
use morpion_http::{AuthenticatedMorpionClient, ClientError};

/// Wrapper around AuthenticatedMorpionClient that handles auth errors
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedMorpionClient,
}

impl WrappedAuthClient {
    /// Create a new wrapped client
    pub fn new(client: AuthenticatedMorpionClient) -> Self {
        Self { inner: client }
    }

    /// Flag a rejected credential to the global handler before surfacing the error
    fn check<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(error) = &result {
            if error.is_auth_expired() {
                crate::auth::error_handler::trigger_auth_error();
            }
        }
        result
    }

    /// Profile of the player owning the API key
    pub async fn profile(&self) -> Result<Player, ClientError> {
        let result = self.inner.profile().await;
        self.check(result)
    }

    /// List the games visible to the current player
    pub async fn list_games(&self) -> Result<Vec<Game>, ClientError> {
        let result = self.inner.list_games().await;
        self.check(result)
    }

    /// Create a new game
    pub async fn create_game(&self) -> Result<Game, ClientError> {
        let result = self.inner.create_game().await;
        self.check(result)
    }

    /// Fetch a single game by id
    pub async fn get_game(&self, id: &str) -> Result<Game, ClientError> {
        let result = self.inner.get_game(id).await;
        self.check(result)
    }

    /// Join an existing game
    pub async fn join_game(&self, id: &str) -> Result<Game, ClientError> {
        let result = self.inner.join_game(id).await;
        self.check(result)
    }

    /// Submit a move
    pub async fn play(&self, id: &str, request: PlayRequest) -> Result<Game, ClientError> {
        let result = self.inner.play(id, request).await;
        self.check(result)
    }
}
