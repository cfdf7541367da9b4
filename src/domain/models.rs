use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Roster entry as served by `GET /players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub rating: f64,
    pub is_active: bool,
}

/// Game outcome as reported by the backend
///
/// The backend only emits `player1win`/`player2win` today; anything else
/// (a future tie marker, garbage) is carried through as `Other` so a single
/// odd record never fails deserialization of the whole game list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[serde(rename = "player1win")]
    Player1Win,
    #[serde(rename = "player2win")]
    Player2Win,
    #[serde(untagged)]
    Other(String),
}

/// Game result as served by `GET /games`
///
/// Games reference players by name, not id; the backend computes the rating
/// deltas when a game is added and they are never recomputed here. The one
/// identity this client does recompute is `prior + change` wherever a
/// post-game rating is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_score: i64,
    pub player2_score: i64,
    pub result: GameOutcome,
    pub timestamp: String,
    pub prior_rating_player1: f64,
    pub prior_rating_player2: f64,
    pub rating_change_player1: f64,
    pub rating_change_player2: f64,
}

impl Game {
    pub fn involves(&self, name: &str) -> bool {
        self.player1_name == name || self.player2_name == name
    }

    /// Basic data-quality check: distinct players and non-negative scores.
    /// Records failing it are skipped during aggregation, never a hard error.
    pub fn is_well_formed(&self) -> bool {
        self.player1_name != self.player2_name
            && self.player1_score >= 0
            && self.player2_score >= 0
    }

    /// Side selection: the player1 columns if `name` is player1, otherwise
    /// the player2 columns. Callers filter with `involves` first.
    pub fn score_for(&self, name: &str) -> i64 {
        if self.player1_name == name {
            self.player1_score
        } else {
            self.player2_score
        }
    }

    pub fn score_against(&self, name: &str) -> i64 {
        if self.player1_name == name {
            self.player2_score
        } else {
            self.player1_score
        }
    }

    pub fn opponent_of(&self, name: &str) -> &str {
        if self.player1_name == name {
            &self.player2_name
        } else {
            &self.player1_name
        }
    }

    /// A win requires the matching explicit outcome for the player's side.
    pub fn is_win_for(&self, name: &str) -> bool {
        (self.player1_name == name && self.result == GameOutcome::Player1Win)
            || (self.player2_name == name && self.result == GameOutcome::Player2Win)
    }

    pub fn prior_rating_for(&self, name: &str) -> f64 {
        if self.player1_name == name {
            self.prior_rating_player1
        } else {
            self.prior_rating_player2
        }
    }

    pub fn rating_change_for(&self, name: &str) -> f64 {
        if self.player1_name == name {
            self.rating_change_player1
        } else {
            self.rating_change_player2
        }
    }

    /// Post-game rating, recomputed from prior + change rather than read from
    /// a stored field.
    pub fn rating_after_for(&self, name: &str) -> f64 {
        self.prior_rating_for(name) + self.rating_change_for(name)
    }

    pub fn new_rating_player1(&self) -> f64 {
        self.prior_rating_player1 + self.rating_change_player1
    }

    pub fn new_rating_player2(&self) -> f64 {
        self.prior_rating_player2 + self.rating_change_player2
    }

    pub fn played_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse a backend timestamp. The API has emitted a few formats over time,
/// including bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game {
            id: 1,
            player1_name: "Alice".to_string(),
            player2_name: "Bob".to_string(),
            player1_score: 21,
            player2_score: 15,
            result: GameOutcome::Player1Win,
            timestamp: "2024-01-01".to_string(),
            prior_rating_player1: 1000.0,
            prior_rating_player2: 1000.0,
            rating_change_player1: 8.0,
            rating_change_player2: -8.0,
        }
    }

    #[test]
    fn test_deserialize_game_from_api_json() {
        let json = r#"{
            "id": 7,
            "player1_name": "Alice",
            "player2_name": "Bob",
            "player1_score": 21,
            "player2_score": 18,
            "result": "player2win",
            "timestamp": "2024-03-05T12:30:00",
            "prior_rating_player1": 1012.0,
            "prior_rating_player2": 988.0,
            "rating_change_player1": -9.0,
            "rating_change_player2": 9.0
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.result, GameOutcome::Player2Win);
        assert_eq!(game.player2_score, 18);
    }

    #[test]
    fn test_unknown_outcome_does_not_fail_deserialization() {
        let outcome: GameOutcome = serde_json::from_str("\"tie\"").unwrap();
        assert_eq!(outcome, GameOutcome::Other("tie".to_string()));
    }

    #[test]
    fn test_rating_identity_recomputed() {
        let game = sample_game();
        assert_eq!(game.new_rating_player1(), 1008.0);
        assert_eq!(game.new_rating_player2(), 992.0);
        assert_eq!(game.rating_after_for("Alice"), 1008.0);
        assert_eq!(game.rating_after_for("Bob"), 992.0);
    }

    #[test]
    fn test_side_selection_helpers() {
        let game = sample_game();
        assert_eq!(game.score_for("Bob"), 15);
        assert_eq!(game.score_against("Bob"), 21);
        assert_eq!(game.opponent_of("Alice"), "Bob");
        assert!(game.is_win_for("Alice"));
        assert!(!game.is_win_for("Bob"));
    }

    #[test]
    fn test_malformed_games_detected() {
        let mut game = sample_game();
        game.player2_name = "Alice".to_string();
        assert!(!game.is_well_formed());

        let mut game = sample_game();
        game.player1_score = -3;
        assert!(!game.is_well_formed());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-01-01").is_some());
        assert!(parse_timestamp("2024-01-01T09:30:00").is_some());
        assert!(parse_timestamp("2024-01-01T09:30:00.250").is_some());
        assert!(parse_timestamp("2024-01-01T09:30:00+02:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
