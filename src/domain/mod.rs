pub mod models;
pub mod roster;
pub mod stats;

pub use models::{Game, GameOutcome, Player};
