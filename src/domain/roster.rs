use std::fmt;

use crate::domain::models::Player;

/// Active/inactive split of the roster, each side in input order
#[derive(Debug, Clone, Default)]
pub struct RosterPartition {
    pub active: Vec<Player>,
    pub inactive: Vec<Player>,
}

/// Split a flat player list into active and inactive sets. Total partition:
/// every player lands in exactly one side, relative order preserved.
pub fn partition_roster(players: &[Player]) -> RosterPartition {
    let (active, inactive) = players.iter().cloned().partition(|p| p.is_active);
    RosterPartition { active, inactive }
}

/// Rating-descending order. The sort is stable, so players with equal ratings
/// keep their input order; no further tie-break is defined.
pub fn rank_players(players: &[Player]) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked
}

/// 1-based rank of a player (by id) in the rating-descending order.
pub fn rank_of_player(players: &[Player], player_id: i64) -> Option<usize> {
    rank_players(players)
        .iter()
        .position(|p| p.id == player_id)
        .map(|index| index + 1)
}

/// Cosmetic tier badge derived purely from relative rank percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTitle {
    Champion,
    Legend,
    Master,
    Pro,
    Novice,
}

impl PlayerTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerTitle::Champion => "Champion",
            PlayerTitle::Legend => "Legend",
            PlayerTitle::Master => "Master",
            PlayerTitle::Pro => "Pro",
            PlayerTitle::Novice => "Novice",
        }
    }
}

impl fmt::Display for PlayerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier badge for a 1-based `rank` among `total_players` ranked players.
/// An empty ranking (or an out-of-range rank) has no title rather than a
/// divide-by-zero.
pub fn title_for_rank(rank: usize, total_players: usize) -> Option<PlayerTitle> {
    if total_players == 0 || rank == 0 || rank > total_players {
        return None;
    }

    if rank == 1 {
        return Some(PlayerTitle::Champion);
    }

    let percentage = rank as f64 / total_players as f64 * 100.0;
    let title = if percentage <= 20.0 {
        PlayerTitle::Legend
    } else if percentage <= 40.0 {
        PlayerTitle::Master
    } else if percentage <= 60.0 {
        PlayerTitle::Pro
    } else {
        PlayerTitle::Novice
    };

    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, name: &str, rating: f64, is_active: bool) -> Player {
        Player {
            id,
            name: name.to_string(),
            rating,
            is_active,
        }
    }

    fn sample_roster() -> Vec<Player> {
        vec![
            player(1, "Alice", 1040.0, true),
            player(2, "Bob", 980.0, false),
            player(3, "Carol", 1105.0, true),
            player(4, "Dan", 1040.0, true),
            player(5, "Erin", 875.0, false),
        ]
    }

    #[test]
    fn test_partition_is_total_and_order_preserving() {
        let players = sample_roster();
        let partition = partition_roster(&players);

        assert_eq!(
            partition.active.len() + partition.inactive.len(),
            players.len()
        );
        let active: Vec<&str> = partition.active.iter().map(|p| p.name.as_str()).collect();
        let inactive: Vec<&str> = partition.inactive.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(active, vec!["Alice", "Carol", "Dan"]);
        assert_eq!(inactive, vec!["Bob", "Erin"]);
    }

    #[test]
    fn test_rank_players_sorted_descending_and_stable() {
        let partition = partition_roster(&sample_roster());
        let ranked = rank_players(&partition.active);

        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        // Alice and Dan share a rating; Alice came first in the input.
        assert_eq!(names, vec!["Carol", "Alice", "Dan"]);
        assert!(ranked.windows(2).all(|w| w[0].rating >= w[1].rating));

        // Repeated calls on identical input give identical output.
        assert_eq!(
            names,
            rank_players(&partition.active)
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_rank_of_player_by_id() {
        let partition = partition_roster(&sample_roster());
        assert_eq!(rank_of_player(&partition.active, 3), Some(1));
        assert_eq!(rank_of_player(&partition.active, 4), Some(3));
        assert_eq!(rank_of_player(&partition.active, 2), None);
    }

    #[test]
    fn test_rank_one_is_always_champion() {
        for total in 1..=50 {
            assert_eq!(title_for_rank(1, total), Some(PlayerTitle::Champion));
        }
    }

    #[test]
    fn test_title_for_empty_roster_is_none() {
        assert_eq!(title_for_rank(1, 0), None);
        assert_eq!(title_for_rank(0, 10), None);
        assert_eq!(title_for_rank(11, 10), None);
    }

    #[test]
    fn test_title_percentage_boundaries() {
        // 10 players: rank 2 = 20% -> Legend, rank 4 = 40% -> Master,
        // rank 6 = 60% -> Pro, rank 7 = 70% -> Novice.
        assert_eq!(title_for_rank(2, 10), Some(PlayerTitle::Legend));
        assert_eq!(title_for_rank(4, 10), Some(PlayerTitle::Master));
        assert_eq!(title_for_rank(6, 10), Some(PlayerTitle::Pro));
        assert_eq!(title_for_rank(7, 10), Some(PlayerTitle::Novice));
        assert_eq!(title_for_rank(10, 10), Some(PlayerTitle::Novice));
    }

    #[test]
    fn test_two_player_roster_titles() {
        assert_eq!(title_for_rank(1, 2), Some(PlayerTitle::Champion));
        // rank 2 of 2 is 100%.
        assert_eq!(title_for_rank(2, 2), Some(PlayerTitle::Novice));
    }
}
