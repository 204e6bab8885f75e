//! Final/current score and W/L status from a box score roster.

use crate::domain::{GameRoster, MatchResult, Outcome};
use crate::error::StatError;

pub const MATCHUP_SEPARATOR: &str = " vs ";

/// Split "TeamA vs TeamB" into its two team labels.
pub fn parse_matchup(label: &str) -> Result<(&str, &str), StatError> {
    let malformed = || StatError::MalformedMatchupLabel {
        label: label.to_string(),
    };

    let mut parts = label.split(MATCHUP_SEPARATOR);
    let (Some(team1), Some(team2), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let (team1, team2) = (team1.trim(), team2.trim());
    if team1.is_empty() || team2.is_empty() {
        return Err(malformed());
    }
    Ok((team1, team2))
}

/// Sum points per team and assign W/L.
///
/// Entries without points are skipped. Entries whose team matches neither side
/// are counted in `unattributed_entries` and otherwise ignored. Team sums
/// saturate at `u32::MAX`. On a tie the second team is awarded the win.
pub fn score_match(roster: &GameRoster) -> Result<MatchResult, StatError> {
    let (team1, team2) = parse_matchup(&roster.matchup)?;

    let mut team1_score = 0u32;
    let mut team2_score = 0u32;
    let mut unattributed_entries = 0usize;

    for entry in &roster.players {
        let Some(points) = entry.points else {
            continue;
        };
        let team = entry.team.trim();
        if team == team1 {
            team1_score = team1_score.saturating_add(points);
        } else if team == team2 {
            team2_score = team2_score.saturating_add(points);
        } else {
            unattributed_entries += 1;
        }
    }

    let (team1_status, team2_status) = if team1_score > team2_score {
        (Outcome::Win, Outcome::Loss)
    } else {
        (Outcome::Loss, Outcome::Win)
    };

    Ok(MatchResult {
        team1: team1.to_string(),
        team1_score,
        team1_status,
        team2: team2.to_string(),
        team2_score,
        team2_status,
        unattributed_entries,
    })
}
