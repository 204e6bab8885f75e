//! Season totals to display-ready per-game stats.

use super::format::{fixed1, percent1};
use crate::domain::{PlayerPerGameStats, PlayerSeasonTotals, StatCode};
use crate::error::StatError;

/// Display value for one stat.
///
/// Counting stats are divided by games played; percentage stats ignore games
/// played and are scaled from a fraction.
pub fn per_game_value(totals: &PlayerSeasonTotals, stat: StatCode) -> Result<String, StatError> {
    let raw = totals.raw(stat);
    if stat.is_percentage() {
        return percent1(stat, raw);
    }
    if totals.games_played == 0 {
        return Err(StatError::DivisionUndefined { stat });
    }
    fixed1(stat, raw / f64::from(totals.games_played))
}

/// Normalize every tracked stat, failing on the first undefined value.
pub fn normalize_stats(totals: &PlayerSeasonTotals) -> Result<PlayerPerGameStats, StatError> {
    let values = StatCode::ALL
        .into_iter()
        .map(|stat| per_game_value(totals, stat).map(|v| (stat, v)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlayerPerGameStats {
        player_id: totals.player_id,
        full_name: totals.full_name.clone(),
        team: totals.team.clone(),
        season: totals.season.clone(),
        games_played: totals.games_played,
        values,
    })
}
