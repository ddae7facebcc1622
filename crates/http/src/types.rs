//! Common types exchanged with the morpion API

use serde::{Deserialize, Serialize};

/// Player registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    /// Display name for the player
    pub name: String,
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Session credential, only present in the registration response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Finished,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Waiting => "waiting for an opponent",
            Self::InProgress => "in progress",
            Self::Finished => "finished",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// A game as reported by the server
///
/// The server owns all rules; clients render this state verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub status: GameStatus,
    #[serde(default)]
    pub players: Vec<Player>,
    /// Nine cells in row-major order, each holding the mark of the player
    /// who took it (`None` while free)
    #[serde(default)]
    pub cells: Vec<Option<String>>,
    /// Id of the player whose turn it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player_id: Option<String>,
    /// Id of the winning player once the game is finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<String>,
}

/// Move submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Cell index in row-major order, 0 through 8
    pub position: usize,
}
