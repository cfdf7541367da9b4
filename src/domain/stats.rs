use std::collections::HashMap;

use chrono::NaiveDateTime;
use log::warn;

use crate::domain::models::Game;

/// Win/loss record over a player's games
///
/// A game only counts as a win on an explicit matching outcome for the
/// player's side; everything else in the player's history, including a tie
/// outcome should the backend ever emit one, lands in the loss bucket. That
/// matches the shipped product behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLossRecord {
    pub wins: usize,
    pub losses: usize,
}

/// Average own/opponent score per game; zeros when no games were played
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AverageScores {
    pub player: f64,
    pub opponent: f64,
}

/// The game with the largest positive score differential in the player's favor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiggestWin {
    pub diff: i64,
    pub player_score: i64,
    pub opponent_score: i64,
    pub opponent: String,
}

/// One point of a player's post-game rating series
#[derive(Debug, Clone, PartialEq)]
pub struct RatingPoint {
    pub played_at: NaiveDateTime,
    pub rating: f64,
}

/// Per-opponent record, for the win-rate breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentRecord {
    pub opponent: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

/// Everything the profile view needs, derived from the game history
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub wins: usize,
    pub losses: usize,
    pub avg_player_score: f64,
    pub avg_opponent_score: f64,
    pub biggest_win: Option<BiggestWin>,
    pub rating_history: Vec<RatingPoint>,
}

/// Games the player took part in, by exact name match (the wire format keys
/// games by name, so name matching stays case-sensitive here). Malformed
/// records are skipped so one bad row never poisons the whole profile.
pub fn games_for_player<'a>(games: &'a [Game], player_name: &str) -> Vec<&'a Game> {
    games
        .iter()
        .filter(|game| {
            if !game.is_well_formed() {
                warn!("Skipping malformed game {} in aggregation", game.id);
                return false;
            }
            game.involves(player_name)
        })
        .collect()
}

pub fn win_loss_record(games: &[Game], player_name: &str) -> WinLossRecord {
    let filtered = games_for_player(games, player_name);
    let wins = filtered
        .iter()
        .filter(|game| game.is_win_for(player_name))
        .count();

    WinLossRecord {
        wins,
        losses: filtered.len() - wins,
    }
}

pub fn average_scores(games: &[Game], player_name: &str) -> AverageScores {
    let filtered = games_for_player(games, player_name);
    if filtered.is_empty() {
        return AverageScores::default();
    }

    let mut total_player = 0;
    let mut total_opponent = 0;
    for game in &filtered {
        total_player += game.score_for(player_name);
        total_opponent += game.score_against(player_name);
    }

    let count = filtered.len() as f64;
    AverageScores {
        player: total_player as f64 / count,
        opponent: total_opponent as f64 / count,
    }
}

/// `None` when the player has no game with a positive point difference.
/// Ties on the maximum difference keep the first game encountered.
pub fn biggest_win(games: &[Game], player_name: &str) -> Option<BiggestWin> {
    let mut best: Option<BiggestWin> = None;

    for game in games_for_player(games, player_name) {
        let player_score = game.score_for(player_name);
        let opponent_score = game.score_against(player_name);
        let diff = player_score - opponent_score;

        if diff > 0 && best.as_ref().is_none_or(|b| diff > b.diff) {
            best = Some(BiggestWin {
                diff,
                player_score,
                opponent_score,
                opponent: game.opponent_of(player_name).to_string(),
            });
        }
    }

    best
}

/// Post-game ratings (`prior + change` for the player's side of each game),
/// sorted by parsed timestamp ascending. The ordering never depends on how
/// the caller happened to order the game list; games without a parseable
/// timestamp are skipped.
pub fn rating_history(games: &[Game], player_name: &str) -> Vec<RatingPoint> {
    let mut history: Vec<RatingPoint> = games_for_player(games, player_name)
        .into_iter()
        .filter_map(|game| match game.played_at() {
            Some(played_at) => Some(RatingPoint {
                played_at,
                rating: game.rating_after_for(player_name),
            }),
            None => {
                warn!(
                    "Skipping game {} with unparseable timestamp {:?}",
                    game.id, game.timestamp
                );
                None
            }
        })
        .collect();

    history.sort_by_key(|point| point.played_at);
    history
}

/// Per-opponent win rates, most-played opponents first. The win test here
/// compares scores directly, as the win-rate chart always has.
pub fn win_rate_by_opponent(games: &[Game], player_name: &str) -> Vec<OpponentRecord> {
    let mut tallies: HashMap<String, (usize, usize)> = HashMap::new();

    for game in games_for_player(games, player_name) {
        let opponent = game.opponent_of(player_name).to_string();
        let entry = tallies.entry(opponent).or_insert((0, 0));
        if game.score_for(player_name) > game.score_against(player_name) {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let mut records: Vec<OpponentRecord> = tallies
        .into_iter()
        .map(|(opponent, (wins, losses))| {
            let games = wins + losses;
            OpponentRecord {
                opponent,
                games,
                wins,
                losses,
                win_rate: wins as f64 / games as f64 * 100.0,
            }
        })
        .collect();

    records.sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.opponent.cmp(&b.opponent)));
    records
}

/// Full derived statistics for one player. Pure in its inputs; calling it
/// twice with the same arguments gives equal results.
pub fn compute_stats(games: &[Game], player_name: &str) -> PlayerStats {
    let record = win_loss_record(games, player_name);
    let averages = average_scores(games, player_name);

    PlayerStats {
        wins: record.wins,
        losses: record.losses,
        avg_player_score: averages.player,
        avg_opponent_score: averages.opponent,
        biggest_win: biggest_win(games, player_name),
        rating_history: rating_history(games, player_name),
    }
}
