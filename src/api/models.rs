use anyhow::Result;
use serde::{Deserialize, Serialize};

const INACTIVE_CONFLICT_MESSAGE: &str = "An inactive player with this name already exists.";

/// Body for `POST /players`
#[derive(Debug, Serialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

/// Answer to `POST /players`
///
/// On success the backend echoes the created player; when the name collides
/// with a deactivated player it answers with a message and the existing id
/// instead, so the caller can offer reactivation.
#[derive(Debug, Deserialize)]
pub struct AddPlayerResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl AddPlayerResponse {
    /// The id of the already-existing inactive player, if that is what the
    /// backend reported.
    pub fn inactive_conflict(&self) -> Option<i64> {
        match self.message.as_deref() {
            Some(INACTIVE_CONFLICT_MESSAGE) => self.player_id,
            _ => None,
        }
    }
}

/// Body for `POST /games`; the backend computes the rating deltas
#[derive(Debug, Serialize)]
pub struct AddGameRequest {
    pub player1_id: i64,
    pub player2_id: i64,
    pub player1_score: i64,
    pub player2_score: i64,
}

impl AddGameRequest {
    pub fn validate(&self) -> Result<()> {
        if self.player1_id == self.player2_id {
            anyhow::bail!("A player cannot play against themselves");
        }
        if self.player1_score < 0 || self.player2_score < 0 {
            anyhow::bail!("Scores must be non-negative");
        }
        Ok(())
    }
}

/// Body for `PUT /games/{id}`
#[derive(Debug, Serialize)]
pub struct GameUpdate {
    pub player1_score: i64,
    pub player2_score: i64,
}
