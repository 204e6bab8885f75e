pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod stats;

pub use adapters::{GoogleImageSearch, ImageSearch, NbaApiClient, PlayerLookup};
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use domain::{
    GameRoster, MatchResult, Outcome, PlayerContribution, PlayerPerGameStats, PlayerSeasonTotals,
    StatCode,
};
pub use error::{CourtsideError, Result, StatError};
pub use stats::{normalize_stats, score_match};
