use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use super::players::per_game_for;
use crate::api::{error::PageError, state::AppState, views};
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct ComparisonForm {
    #[serde(rename = "player1Name", default)]
    pub player1_name: String,
    #[serde(rename = "player2Name", default)]
    pub player2_name: String,
}

/// GET /player-comparison
pub async fn comparison_form() -> Html<String> {
    Html(views::comparison_form())
}

/// POST /player-comparison
pub async fn player_comparison(
    State(state): State<AppState>,
    Form(form): Form<ComparisonForm>,
) -> std::result::Result<Html<String>, PageError> {
    let rendered = render_comparison(&state, &form).await;
    state.page(rendered)
}

async fn render_comparison(state: &AppState, form: &ComparisonForm) -> Result<String> {
    let (first, second) = tokio::try_join!(
        per_game_for(state, &form.player1_name),
        per_game_for(state, &form.player2_name),
    )?;
    Ok(views::comparison(
        (form.player1_name.trim(), form.player2_name.trim()),
        &first,
        &second,
    ))
}
