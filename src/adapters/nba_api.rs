//! REST client for the NBA statistics service.
//!
//! The service wraps stats.nba.com and replaces NaN values with the string
//! `"Nil"`, so numeric fields are read leniently.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::traits::PlayerLookup;
use crate::config::NbaApiConfig;
use crate::domain::{
    current_season, GameOfTheDay, GameRoster, LeaderBoard, LeaderEntry, LeaderQuery,
    PlayerContribution, PlayerOfTheDay, PlayerSeasonTotals, PlayerSummary, StatCode,
};
use crate::error::{CourtsideError, Result};

const SERVICE: &str = "nba_api";

#[derive(Clone)]
pub struct NbaApiClient {
    http: Client,
    base_url: String,
}

impl NbaApiClient {
    pub fn new(config: &NbaApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("courtside/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                CourtsideError::Internal(format!("failed to build stats HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "stats request");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| transport_error(path, e))?;

        if !status.is_success() {
            warn!(path, %status, "stats service returned an error status");
            return Err(CourtsideError::upstream(
                SERVICE,
                format!("GET {} failed: status={} body={}", path, status, excerpt(&text)),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            CourtsideError::upstream(SERVICE, format!("invalid JSON from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl PlayerLookup for NbaApiClient {
    async fn search_players(&self, name: &str) -> Result<Vec<PlayerSummary>> {
        let body = self
            .get_json("/search-player", &[("name", name.to_string())])
            .await?;
        parse_player_search(body)
    }

    async fn season_totals(&self, player: &PlayerSummary) -> Result<PlayerSeasonTotals> {
        let body = self
            .get_json(&format!("/player-stats/{}", player.id), &[])
            .await?;
        parse_season_totals(player, &body)
    }

    async fn player_of_the_day(&self, days_ago: u32) -> Result<PlayerOfTheDay> {
        let body = self
            .get_json("/player-of-the-day", &[("days_ago", days_ago.to_string())])
            .await?;
        parse_player_of_the_day(&body)
    }

    async fn games_of_the_day(&self, days_ago: u32) -> Result<Vec<GameOfTheDay>> {
        let body = self
            .get_json("/matches-of-the-day", &[("days_ago", days_ago.to_string())])
            .await?;
        parse_games_of_the_day(&body)
    }

    async fn league_leaders(&self, query: &LeaderQuery) -> Result<LeaderBoard> {
        let body = self
            .get_json(
                "/leaders",
                &[
                    ("stat", query.stat.as_str().to_string()),
                    ("limit", query.limit.to_string()),
                ],
            )
            .await?;
        parse_leaders(query, &body)
    }
}

fn transport_error(path: &str, err: reqwest::Error) -> CourtsideError {
    let reason = if err.is_timeout() {
        format!("GET {} timed out", path)
    } else {
        format!("GET {} failed: {}", path, err)
    };
    warn!(%reason, "stats service unreachable");
    CourtsideError::upstream(SERVICE, reason)
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn malformed(what: &str) -> CourtsideError {
    CourtsideError::upstream(SERVICE, format!("malformed {} response", what))
}

/// Number, numeric string, `null` or `"Nil"`.
fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn count(value: Option<&Value>) -> Option<u32> {
    number(value)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.round() as u32)
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn parse_player_search(body: Value) -> Result<Vec<PlayerSummary>> {
    serde_json::from_value(body).map_err(|_| malformed("player search"))
}

fn parse_season_totals(player: &PlayerSummary, body: &Value) -> Result<PlayerSeasonTotals> {
    if let Some(error) = text(body.get("error")) {
        return Err(if error.starts_with("No stats found") {
            CourtsideError::NotFound(error)
        } else {
            CourtsideError::upstream(SERVICE, error)
        });
    }

    let stats = body
        .get("stats")
        .filter(|s| s.is_object())
        .ok_or_else(|| malformed("player stats"))?;

    let mut totals = PlayerSeasonTotals::empty(player);
    totals.season = text(body.get("season")).or_else(|| text(stats.get("SEASON_ID")));
    if let Some(team) = text(stats.get("TEAM_ABBREVIATION")) {
        totals.team = Some(team);
    }
    totals.games_played = count(stats.get("GP")).unwrap_or(0);
    for code in StatCode::ALL {
        totals.set_raw(code, number(stats.get(code.as_str())).unwrap_or(0.0));
    }
    Ok(totals)
}

fn parse_player_of_the_day(body: &Value) -> Result<PlayerOfTheDay> {
    let Some(potd) = body.get("player_of_the_day") else {
        return Err(match text(body.get("message")) {
            Some(message) => CourtsideError::NotFound(message),
            None => malformed("player of the day"),
        });
    };

    let player = text(potd.get("Player")).ok_or_else(|| malformed("player of the day"))?;
    Ok(PlayerOfTheDay {
        date: text(body.get("date")).unwrap_or_default(),
        player,
        team: text(potd.get("Team")),
        points: count(potd.get("Points")).unwrap_or(0),
        rebounds: count(potd.get("Rebounds")).unwrap_or(0),
        assists: count(potd.get("Assists")).unwrap_or(0),
        opponent: text(potd.get("Opponent")).filter(|o| o != "N/A"),
        final_score: text(potd.get("Final_Score")).filter(|s| s != "Score unavailable"),
    })
}

fn parse_games_of_the_day(body: &Value) -> Result<Vec<GameOfTheDay>> {
    let games = body
        .get("games")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("matches of the day"))?;

    let mut out = Vec::with_capacity(games.len());
    for game in games {
        let Some(matchup) = text(game.get("matchup")) else {
            debug!("skipping game without a matchup label");
            continue;
        };
        let players = game
            .get("players")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .map(|row| PlayerContribution {
                        player_name: text(row.get("PLAYER_NAME")),
                        team: text(row.get("TEAM_ABBREVIATION")).unwrap_or_default(),
                        points: count(row.get("PTS")),
                    })
                    .collect()
            })
            .unwrap_or_default();

        out.push(GameOfTheDay {
            date: text(game.get("date")),
            final_score: text(game.get("final_score")),
            roster: GameRoster { matchup, players },
        });
    }
    Ok(out)
}

fn parse_leaders(query: &LeaderQuery, body: &Value) -> Result<LeaderBoard> {
    let rows = body
        .get("leaders")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("league leaders"))?;

    let leaders = rows
        .iter()
        .filter_map(|row| {
            Some(LeaderEntry {
                player_id: row.get("player_id").and_then(Value::as_u64)?,
                player_name: text(row.get("player_name"))?,
                team_abbr: text(row.get("team_abbr")),
                value: number(row.get("value")),
            })
        })
        .collect();

    Ok(LeaderBoard {
        season: text(body.get("season")).unwrap_or_else(current_season),
        stat: query.stat,
        leaders,
    })
}
