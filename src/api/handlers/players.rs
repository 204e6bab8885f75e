use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use super::image_for;
use crate::adapters::per_game_stats;
use crate::api::{error::PageError, state::AppState, views};
use crate::domain::PlayerPerGameStats;
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct PlayerStatsForm {
    #[serde(rename = "playerName", default)]
    pub player_name: String,
}

/// GET /player-stats
pub async fn player_stats_form() -> Html<String> {
    Html(views::player_stats_form())
}

/// POST /player-stats
pub async fn player_stats(
    State(state): State<AppState>,
    Form(form): Form<PlayerStatsForm>,
) -> std::result::Result<Html<String>, PageError> {
    let rendered = render_player_stats(&state, &form.player_name).await;
    state.page(rendered)
}

pub(crate) async fn per_game_for(state: &AppState, name: &str) -> Result<PlayerPerGameStats> {
    state
        .observe(per_game_stats(state.players.as_ref(), name).await)
        .await
}

async fn render_player_stats(state: &AppState, name: &str) -> Result<String> {
    let stats = per_game_for(state, name).await?;
    let image = image_for(state, &stats.full_name).await;
    Ok(views::player_stats(name.trim(), &stats, image.as_deref()))
}
