use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::{debug, warn};

use super::DaysQuery;
use crate::api::{error::PageError, state::AppState, views};
use crate::error::Result;
use crate::stats::score_match;

/// GET /matches-today?days_ago=N
pub async fn matches_page(
    State(state): State<AppState>,
    Query(query): Query<DaysQuery>,
) -> std::result::Result<Html<String>, PageError> {
    let rendered = render_matches(&state, query.resolve(&state)).await;
    state.page(rendered)
}

async fn render_matches(state: &AppState, days_ago: u32) -> Result<String> {
    let games = state
        .observe(state.players.games_of_the_day(days_ago).await)
        .await?;

    let scored: Vec<_> = games
        .into_iter()
        .map(|game| {
            let result = score_match(&game.roster);
            match &result {
                Ok(r) if r.unattributed_entries > 0 => warn!(
                    matchup = %game.roster.matchup,
                    entries = r.unattributed_entries,
                    "roster entries matched neither team"
                ),
                Err(e) => debug!(error = %e, "matchup left unscored"),
                Ok(_) => {}
            }
            (game, result)
        })
        .collect();

    Ok(views::matches(&scored))
}
