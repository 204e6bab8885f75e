//! Terminal versions of the site's pages.

use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use super::output::{print_items, OutputMode};
use crate::adapters::{per_game_stats, PlayerLookup};
use crate::domain::{LeaderBoard, LeaderQuery, PlayerPerGameStats, StatCode};
use crate::stats::{display_value, score_match};

#[derive(Debug, Tabled, Serialize)]
pub struct StatRow {
    pub stat: &'static str,
    pub player: String,
    pub value: String,
}

#[derive(Debug, Tabled, Serialize)]
pub struct LeaderRow {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub value: String,
}

#[derive(Debug, Tabled, Serialize)]
pub struct MatchRow {
    pub matchup: String,
    pub score: String,
    pub winner: String,
}

pub fn stat_rows(players: &[PlayerPerGameStats]) -> Vec<StatRow> {
    StatCode::ALL
        .into_iter()
        .flat_map(|code| {
            players.iter().map(move |p| StatRow {
                stat: code.as_str(),
                player: p.full_name.clone(),
                value: p.get(code).unwrap_or("-").to_string(),
            })
        })
        .collect()
}

pub fn leader_rows(board: &LeaderBoard) -> Vec<LeaderRow> {
    board
        .leaders
        .iter()
        .enumerate()
        .map(|(i, entry)| LeaderRow {
            rank: i + 1,
            player: entry.player_name.clone(),
            team: entry.team_abbr.clone().unwrap_or_default(),
            value: entry
                .value
                .and_then(|v| display_value(board.stat, v).ok())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub async fn show_player(
    lookup: &dyn PlayerLookup,
    name: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let stats = per_game_stats(lookup, name).await?;
    print_items(&stat_rows(&[stats]), mode)
}

pub async fn compare_players(
    lookup: &dyn PlayerLookup,
    first: &str,
    second: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (a, b) = tokio::try_join!(
        per_game_stats(lookup, first),
        per_game_stats(lookup, second)
    )?;
    print_items(&stat_rows(&[a, b]), mode)
}

pub async fn show_leaders(
    lookup: &dyn PlayerLookup,
    stat: &str,
    limit: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let query = LeaderQuery::parse(stat, limit)?;
    let board = lookup.league_leaders(&query).await?;
    print_items(&leader_rows(&board), mode)
}

pub async fn show_matches(
    lookup: &dyn PlayerLookup,
    days_ago: u32,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let games = lookup.games_of_the_day(days_ago).await?;
    let rows: Vec<MatchRow> = games
        .iter()
        .map(|game| match score_match(&game.roster) {
            Ok(result) => {
                if result.unattributed_entries > 0 {
                    warn!(
                        matchup = %game.roster.matchup,
                        entries = result.unattributed_entries,
                        "roster entries matched neither team"
                    );
                }
                MatchRow {
                    matchup: game.roster.matchup.clone(),
                    score: result.scoreline(),
                    winner: result.winner().to_string(),
                }
            }
            Err(_) => MatchRow {
                matchup: game.roster.matchup.clone(),
                score: game
                    .final_score
                    .clone()
                    .unwrap_or_else(|| "score unavailable".to_string()),
                winner: "-".to_string(),
            },
        })
        .collect();
    print_items(&rows, mode)
}
