use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{image_for, DaysQuery};
use crate::api::{error::PageError, state::AppState, views};
use crate::error::{CourtsideError, Result};

/// GET /?days_ago=N
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<DaysQuery>,
) -> std::result::Result<Html<String>, PageError> {
    let rendered = render_home(&state, query.resolve(&state)).await;
    state.page(rendered)
}

async fn render_home(state: &AppState, days_ago: u32) -> Result<String> {
    let potd = match state
        .observe(state.players.player_of_the_day(days_ago).await)
        .await
    {
        Ok(potd) => potd,
        // No games that day is a normal page, not an error
        Err(CourtsideError::NotFound(message)) => return Ok(views::home_unavailable(&message)),
        Err(e) => return Err(e),
    };

    let image = image_for(state, &potd.player).await;
    Ok(views::home(&potd, image.as_deref()))
}
