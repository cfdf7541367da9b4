use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::api::RallyRankClient;
use crate::api::models::{AddGameRequest, AddPlayerResponse, GameUpdate};
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::domain::models::{Game, Player};

const SNAPSHOT_KEY: &str = "snapshot";

/// One fetch cycle's worth of backend data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub fetched_at: NaiveDateTime,
}

/// Fetch-and-cache orchestration
///
/// Read commands serve the cached snapshot unless asked to refresh; every
/// mutation goes through here so the cached snapshot is invalidated and
/// refetched in the same step, replacing the old UI's global refresh flags.
pub struct SnapshotService {
    client: RallyRankClient,
    cache: Cache,
}

impl SnapshotService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: RallyRankClient::new(&config.api)?,
            cache: Cache::new(&config.cache.dir)?,
        })
    }

    pub async fn load(&mut self, refresh: bool) -> Result<Snapshot> {
        if !refresh {
            if let Some(snapshot) = self.cache.load::<Snapshot>(SNAPSHOT_KEY)? {
                return Ok(snapshot);
            }
        }
        self.invalidate_and_refetch().await
    }

    pub async fn invalidate_and_refetch(&mut self) -> Result<Snapshot> {
        info!("Fetching snapshot from backend");

        let players = self.client.get_players().await?;
        let games = self.client.get_games().await?;

        let snapshot = Snapshot {
            players,
            games,
            fetched_at: Utc::now().naive_utc(),
        };

        self.cache.save(SNAPSHOT_KEY, &snapshot)?;
        info!(
            "  → {} players, {} games",
            snapshot.players.len(),
            snapshot.games.len()
        );

        Ok(snapshot)
    }

    // --- Mutations ---
    //
    // Each one hits the backend and then refetches, so the next read sees
    // the new ratings the backend computed.

    pub async fn add_player(&mut self, name: &str) -> Result<AddPlayerResponse> {
        let response = self.client.add_player(name).await?;
        self.invalidate_and_refetch().await?;
        Ok(response)
    }

    pub async fn remove_player(&mut self, player_id: i64) -> Result<()> {
        self.client.remove_player(player_id).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }

    pub async fn reactivate_player(&mut self, player_id: i64) -> Result<()> {
        self.client.reactivate_player(player_id).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }

    pub async fn delete_player(&mut self, player_id: i64) -> Result<()> {
        self.client.delete_player(player_id).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }

    pub async fn add_game(&mut self, request: &AddGameRequest) -> Result<()> {
        self.client.add_game(request).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }

    pub async fn edit_game(&mut self, game_id: i64, update: &GameUpdate) -> Result<()> {
        self.client.edit_game(game_id, update).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }

    pub async fn delete_game(&mut self, game_id: i64) -> Result<()> {
        self.client.delete_game(game_id).await?;
        self.invalidate_and_refetch().await?;
        Ok(())
    }
}
