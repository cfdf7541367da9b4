use anyhow::{Context, Result};
use log::info;

use crate::api::models::{AddGameRequest, AddPlayerRequest, AddPlayerResponse, GameUpdate};
use crate::config::settings::ApiSettings;
use crate::domain::models::{Game, Player};
use crate::http::RateLimitedClient;

/// RallyRank backend API client
///
/// Thin wrapper over the REST endpoints. All rating math lives behind these
/// endpoints; this client only moves data.
pub struct RallyRankClient {
    client: RateLimitedClient,
    base_url: String,
}

impl RallyRankClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_players(&mut self) -> Result<Vec<Player>> {
        let url = self.url("/players");
        info!("Fetching players from {}", url);

        let response = self.client.get(&url).await?;
        Self::ensure_success(&response)?;
        response.json().await.context("Failed to parse player list")
    }

    pub async fn get_games(&mut self) -> Result<Vec<Game>> {
        let url = self.url("/games");
        info!("Fetching games from {}", url);

        let response = self.client.get(&url).await?;
        Self::ensure_success(&response)?;
        response.json().await.context("Failed to parse game list")
    }

    pub async fn add_player(&mut self, name: &str) -> Result<AddPlayerResponse> {
        let url = self.url("/players");
        let request = AddPlayerRequest {
            name: name.to_string(),
        };

        let response = self.client.post_json(&url, &request).await?;
        Self::ensure_success(&response)?;
        response
            .json()
            .await
            .context("Failed to parse add-player response")
    }

    /// Soft removal: the backend flips `is_active`, history stays.
    pub async fn remove_player(&mut self, player_id: i64) -> Result<()> {
        let url = self.url(&format!("/players/{}", player_id));
        let response = self.client.delete(&url).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    pub async fn reactivate_player(&mut self, player_id: i64) -> Result<()> {
        let url = self.url(&format!("/players/reactivate/{}", player_id));
        let response = self.client.post_json(&url, &serde_json::json!({})).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    /// Permanent removal of the player and every game they appear in.
    pub async fn delete_player(&mut self, player_id: i64) -> Result<()> {
        let url = self.url(&format!("/players/{}/delete", player_id));
        let response = self.client.delete(&url).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    pub async fn add_game(&mut self, request: &AddGameRequest) -> Result<()> {
        request.validate()?;

        let url = self.url("/games");
        let response = self.client.post_json(&url, request).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    pub async fn edit_game(&mut self, game_id: i64, update: &GameUpdate) -> Result<()> {
        let url = self.url(&format!("/games/{}", game_id));
        let response = self.client.put_json(&url, update).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    pub async fn delete_game(&mut self, game_id: i64) -> Result<()> {
        let url = self.url(&format!("/games/{}", game_id));
        let response = self.client.delete(&url).await?;
        Self::ensure_success(&response)?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_success(response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }
        Ok(())
    }
}
