pub mod game;
pub mod leaders;
pub mod player;
pub mod season;

pub use game::{GameOfTheDay, GameRoster, MatchResult, Outcome, PlayerContribution, PlayerOfTheDay};
pub use leaders::{LeaderBoard, LeaderEntry, LeaderQuery, LEADER_LIMITS};
pub use player::{PlayerPerGameStats, PlayerSeasonTotals, PlayerSummary, StatCode};
pub use season::{current_season, season_for};
