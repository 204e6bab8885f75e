pub mod comparison;
pub mod home;
pub mod leaders;
pub mod matches;
pub mod players;

pub use comparison::*;
pub use home::*;
pub use leaders::*;
pub use matches::*;
pub use players::*;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::error::CourtsideError;

/// `?days_ago=N` on the "today" pages
#[derive(Debug, Default, Deserialize)]
pub struct DaysQuery {
    pub days_ago: Option<u32>,
}

impl DaysQuery {
    pub fn resolve(&self, state: &AppState) -> u32 {
        self.days_ago.unwrap_or(state.default_days_ago)
    }
}

/// Picture for a page header. Failures only cost the picture.
pub(crate) async fn image_for(state: &AppState, query: &str) -> Option<String> {
    match state.observe(state.images.first_image(query).await).await {
        Ok(link) => Some(link),
        Err(CourtsideError::NotFound(reason)) => {
            debug!(query, %reason, "no image");
            None
        }
        Err(e) => {
            warn!(query, error = %e, "image lookup failed, rendering without picture");
            None
        }
    }
}
