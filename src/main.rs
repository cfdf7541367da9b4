use anyhow::Result;

use rallyrank::cli::Command;
use rallyrank::{
    handle_add_game, handle_add_player, handle_delete_game, handle_delete_player,
    handle_edit_game, handle_games, handle_players, handle_profile, handle_rankings,
    handle_reactivate_player, handle_refresh, handle_remove_player, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Rankings { refresh } => handle_rankings(refresh),
        Command::Players { refresh } => handle_players(refresh),
        Command::Games { refresh } => handle_games(refresh),
        Command::Profile { name, refresh } => handle_profile(name, refresh),
        Command::AddPlayer { name } => handle_add_player(name),
        Command::RemovePlayer { id } => handle_remove_player(id),
        Command::ReactivatePlayer { id } => handle_reactivate_player(id),
        Command::DeletePlayer { id } => handle_delete_player(id),
        Command::AddGame {
            player1_id,
            player2_id,
            player1_score,
            player2_score,
        } => handle_add_game(player1_id, player2_id, player1_score, player2_score),
        Command::EditGame {
            id,
            player1_score,
            player2_score,
        } => handle_edit_game(id, player1_score, player2_score),
        Command::DeleteGame { id } => handle_delete_game(id),
        Command::Refresh => handle_refresh(),
    }
}
