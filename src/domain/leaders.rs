use serde::Serialize;

use super::StatCode;
use crate::error::{CourtsideError, Result};

/// Leaderboard sizes offered by the league-leaders form
pub const LEADER_LIMITS: [u32; 5] = [5, 10, 20, 50, 100];

/// A validated league-leaders request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderQuery {
    pub stat: StatCode,
    pub limit: u32,
}

impl LeaderQuery {
    /// Validate raw form input. Only the listed categories and limits are accepted.
    pub fn parse(stat: &str, limit: &str) -> Result<Self> {
        let stat = stat
            .parse::<StatCode>()
            .map_err(|_| CourtsideError::Validation("Invalid stat category".to_string()))?;
        let limit = limit
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|l| LEADER_LIMITS.contains(l))
            .ok_or_else(|| CourtsideError::Validation("Invalid limit".to_string()))?;
        Ok(Self { stat, limit })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub player_id: u64,
    pub player_name: String,
    pub team_abbr: Option<String>,
    /// Per-game value (or fraction for percentage categories)
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderBoard {
    pub season: String,
    pub stat: StatCode,
    pub leaders: Vec<LeaderEntry>,
}
