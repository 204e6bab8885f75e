use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::api::{error::PageError, state::AppState, views};
use crate::domain::LeaderQuery;
use crate::error::Result;

/// Raw form input; validated by `LeaderQuery::parse`
#[derive(Debug, Deserialize)]
pub struct LeadersForm {
    #[serde(default)]
    pub stat: String,
    #[serde(default)]
    pub limit: String,
}

/// GET /league-leaders
pub async fn leaders_form() -> Html<String> {
    Html(views::leaders_form_page())
}

/// POST /league-leaders
pub async fn league_leaders(
    State(state): State<AppState>,
    Form(form): Form<LeadersForm>,
) -> std::result::Result<Html<String>, PageError> {
    let rendered = render_leaders(&state, &form).await;
    state.page(rendered)
}

async fn render_leaders(state: &AppState, form: &LeadersForm) -> Result<String> {
    let query = LeaderQuery::parse(&form.stat, &form.limit)?;
    let board = state
        .observe(state.players.league_leaders(&query).await)
        .await?;
    Ok(views::leaders(&query, &board))
}
