use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "rallyrank terminal client")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Show the current rankings with tier badges
    Rankings {
        /// Bypass the cached snapshot and refetch first
        #[arg(long)]
        refresh: bool,
    },
    /// List active and inactive players
    Players {
        #[arg(long)]
        refresh: bool,
    },
    /// Show the game history, most recent first
    Games {
        #[arg(long)]
        refresh: bool,
    },
    /// Show a player's full profile and statistics
    Profile {
        /// Player name, matched exactly
        name: String,
        #[arg(long)]
        refresh: bool,
    },
    /// Register a new player
    AddPlayer {
        name: String,
    },
    /// Deactivate a player (their games are kept)
    RemovePlayer {
        id: i64,
    },
    /// Bring a deactivated player back
    ReactivatePlayer {
        id: i64,
    },
    /// Permanently delete a player and all their games
    DeletePlayer {
        id: i64,
    },
    /// Record a game result; the backend computes the rating changes
    AddGame {
        player1_id: i64,
        player2_id: i64,
        player1_score: i64,
        player2_score: i64,
    },
    /// Correct the scores of an existing game
    EditGame {
        id: i64,
        player1_score: i64,
        player2_score: i64,
    },
    /// Delete a game
    DeleteGame {
        id: i64,
    },
    /// Invalidate the cached snapshot and refetch from the backend
    Refresh,
}
