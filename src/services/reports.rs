use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::domain::models::{Game, GameOutcome};
use crate::domain::roster::{self, PlayerTitle};
use crate::domain::stats;
use crate::services::snapshot::Snapshot;

/// Rank-ordered view of the active roster with tier badges.
pub fn render_rankings(snapshot: &Snapshot) {
    let partition = roster::partition_roster(&snapshot.players);
    let ranked = roster::rank_players(&partition.active);

    if ranked.is_empty() {
        println!("No active players yet. Go play some ping pong!");
        return;
    }

    println!("{}", "Current Rankings".bold());
    println!("{:>4}  {:<10}  {:<24}  {:>7}", "Rank", "Title", "Player", "Rating");
    for (index, player) in ranked.iter().enumerate() {
        let rank = index + 1;
        let title = roster::title_for_rank(rank, ranked.len());
        println!(
            "{:>4}  {}  {:<24}  {:>7.0}",
            rank,
            title_badge(title),
            player.name,
            player.rating
        );
    }
}

/// Active and inactive rosters, input order.
pub fn render_players(snapshot: &Snapshot) {
    let partition = roster::partition_roster(&snapshot.players);

    println!("{}", "Active Players".bold());
    if partition.active.is_empty() {
        println!("  (none)");
    }
    for player in &partition.active {
        println!("  #{:<4} {:<24} {:>7.0}", player.id, player.name, player.rating);
    }

    if !partition.inactive.is_empty() {
        println!();
        println!("{}", "Inactive Players".bold());
        for player in &partition.inactive {
            println!(
                "  {}",
                format!("#{:<4} {:<24} {:>7.0}", player.id, player.name, player.rating).dimmed()
            );
        }
    }
}

/// Game history, most recent first. Post-game ratings are recomputed from
/// prior + change, never read from a stored field.
pub fn render_games(snapshot: &Snapshot) {
    if snapshot.games.is_empty() {
        println!("No games recorded yet.");
        return;
    }

    let mut games: Vec<&Game> = snapshot.games.iter().collect();
    games.sort_by(|a, b| b.played_at().cmp(&a.played_at()));

    println!("{}", "Recent Game Results".bold());
    for game in games {
        let date = game
            .played_at()
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let winner = match &game.result {
            GameOutcome::Player1Win => game.player1_name.as_str(),
            GameOutcome::Player2Win => game.player2_name.as_str(),
            GameOutcome::Other(_) => "-",
        };

        println!(
            "  #{:<4} {}  {} {} : {} {}  winner: {}  ratings: {:.0} / {:.0}",
            game.id,
            date,
            game.player1_name,
            game.player1_score,
            game.player2_score,
            game.player2_name,
            winner.bold(),
            game.new_rating_player1(),
            game.new_rating_player2(),
        );
    }
}

/// Full profile for one player: rank, badge, record, averages, biggest win,
/// rating history and per-opponent win rates.
pub fn render_profile(snapshot: &Snapshot, player_name: &str) -> Result<()> {
    let player = snapshot
        .players
        .iter()
        .find(|p| p.name == player_name)
        .ok_or_else(|| anyhow::anyhow!("No player named '{}'", player_name))?;

    let partition = roster::partition_roster(&snapshot.players);
    let rank = roster::rank_of_player(&partition.active, player.id);
    let title = rank.and_then(|r| roster::title_for_rank(r, partition.active.len()));
    let player_stats = stats::compute_stats(&snapshot.games, &player.name);

    match title {
        Some(_) => println!("{}  {}", player.name.bold(), title_badge(title)),
        None => println!("{}  {}", player.name.bold(), "(inactive)".dimmed()),
    }

    let rank_label = match rank {
        Some(r) => format!("{} of {}", r, partition.active.len()),
        None => "-".to_string(),
    };
    println!("  Rank        {}", rank_label);
    println!("  Rating      {:.0}", player.rating);
    println!("  Record      {}W - {}L", player_stats.wins, player_stats.losses);
    println!(
        "  Avg score   {:.0} - {:.0}",
        player_stats.avg_player_score, player_stats.avg_opponent_score
    );

    match &player_stats.biggest_win {
        Some(win) => println!(
            "  Biggest win {}-{} vs {} (+{})",
            win.player_score, win.opponent_score, win.opponent, win.diff
        ),
        None => println!("  Biggest win N/A"),
    }

    if !player_stats.rating_history.is_empty() {
        println!();
        println!("{}", "Rating history".bold());
        for point in &player_stats.rating_history {
            println!(
                "  {}  {:>6.0}",
                point.played_at.format("%Y-%m-%d"),
                point.rating
            );
        }
    }

    let opponents = stats::win_rate_by_opponent(&snapshot.games, &player.name);
    if !opponents.is_empty() {
        println!();
        println!("{}", "Win rate by opponent".bold());
        for record in &opponents {
            println!(
                "  {:<24} {:>3.0}%  ({}-{}, {} games)",
                record.opponent, record.win_rate, record.wins, record.losses, record.games
            );
        }
    }

    Ok(())
}

/// Pad before coloring so ANSI codes don't break column widths.
fn title_badge(title: Option<PlayerTitle>) -> ColoredString {
    let padded = format!("{:<10}", title.map_or("-", |t| t.as_str()));
    match title {
        Some(PlayerTitle::Champion) => padded.yellow(),
        Some(PlayerTitle::Legend) => padded.red(),
        Some(PlayerTitle::Master) => padded.blue(),
        Some(PlayerTitle::Pro) => padded.green(),
        Some(PlayerTitle::Novice) => padded.dimmed(),
        None => padded.normal(),
    }
}
