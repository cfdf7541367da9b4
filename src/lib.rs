pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod services;

use std::future::Future;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::api::models::{AddGameRequest, GameUpdate};
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::roster;
use crate::services::reports;
use crate::services::snapshot::SnapshotService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn run_with_service<F, Fut>(f: F) -> Result<()>
where
    F: FnOnce(SnapshotService) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = SnapshotService::new(&config)?;
        f(service).await
    })
}

pub fn handle_rankings(refresh: bool) -> Result<()> {
    run_with_service(|mut service| async move {
        let snapshot = service.load(refresh).await?;
        reports::render_rankings(&snapshot);
        Ok(())
    })
}

pub fn handle_players(refresh: bool) -> Result<()> {
    run_with_service(|mut service| async move {
        let snapshot = service.load(refresh).await?;
        reports::render_players(&snapshot);
        Ok(())
    })
}

pub fn handle_games(refresh: bool) -> Result<()> {
    run_with_service(|mut service| async move {
        let snapshot = service.load(refresh).await?;
        reports::render_games(&snapshot);
        Ok(())
    })
}

pub fn handle_profile(name: String, refresh: bool) -> Result<()> {
    run_with_service(|mut service| async move {
        let snapshot = service.load(refresh).await?;
        reports::render_profile(&snapshot, &name)
    })
}

pub fn handle_add_player(name: String) -> Result<()> {
    run_with_service(|mut service| async move {
        let response = service.add_player(&name).await?;
        match response.inactive_conflict() {
            Some(player_id) => println!(
                "A player named '{}' already exists but is inactive (id {}). \
                 Use reactivate-player to bring them back.",
                name, player_id
            ),
            None => println!("Player '{}' added.", name),
        }
        Ok(())
    })
}

pub fn handle_remove_player(id: i64) -> Result<()> {
    run_with_service(|mut service| async move {
        service.remove_player(id).await?;
        println!("Player {} deactivated.", id);
        Ok(())
    })
}

pub fn handle_reactivate_player(id: i64) -> Result<()> {
    run_with_service(|mut service| async move {
        service.reactivate_player(id).await?;
        println!("Player {} reactivated.", id);
        Ok(())
    })
}

pub fn handle_delete_player(id: i64) -> Result<()> {
    run_with_service(|mut service| async move {
        service.delete_player(id).await?;
        println!("Player {} and their games deleted.", id);
        Ok(())
    })
}

pub fn handle_add_game(
    player1_id: i64,
    player2_id: i64,
    player1_score: i64,
    player2_score: i64,
) -> Result<()> {
    run_with_service(|mut service| async move {
        let request = AddGameRequest {
            player1_id,
            player2_id,
            player1_score,
            player2_score,
        };
        service.add_game(&request).await?;
        println!("Game recorded.");
        Ok(())
    })
}

pub fn handle_edit_game(id: i64, player1_score: i64, player2_score: i64) -> Result<()> {
    run_with_service(|mut service| async move {
        let update = GameUpdate {
            player1_score,
            player2_score,
        };
        service.edit_game(id, &update).await?;
        println!("Game {} updated.", id);
        Ok(())
    })
}

pub fn handle_delete_game(id: i64) -> Result<()> {
    run_with_service(|mut service| async move {
        service.delete_game(id).await?;
        println!("Game {} deleted.", id);
        Ok(())
    })
}

pub fn handle_refresh() -> Result<()> {
    run_with_service(|mut service| async move {
        let snapshot = service.invalidate_and_refetch().await?;
        let partition = roster::partition_roster(&snapshot.players);
        println!(
            "Refreshed: {} active players, {} inactive, {} games.",
            partition.active.len(),
            partition.inactive.len(),
            snapshot.games.len()
        );
        Ok(())
    })
}
