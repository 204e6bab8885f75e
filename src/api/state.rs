use axum::response::Html;
use std::sync::Arc;

use crate::adapters::{ImageSearch, PlayerLookup};
use crate::api::error::PageError;
use crate::error::Result;
use crate::services::HealthState;

/// Shared application state for page handlers
#[derive(Clone)]
pub struct AppState {
    /// Statistics service client
    pub players: Arc<dyn PlayerLookup>,

    /// Image search client
    pub images: Arc<dyn ImageSearch>,

    /// Request and upstream counters
    pub health: Arc<HealthState>,

    /// Days back the "today" pages look when the query omits `days_ago`
    pub default_days_ago: u32,
}

impl AppState {
    pub fn new(players: Arc<dyn PlayerLookup>, images: Arc<dyn ImageSearch>) -> Self {
        Self {
            players,
            images,
            health: Arc::new(HealthState::new()),
            default_days_ago: 1,
        }
    }

    pub fn with_default_days_ago(mut self, days: u32) -> Self {
        self.default_days_ago = days;
        self
    }

    /// Record the outcome of an upstream call in the health state.
    pub async fn observe<T>(&self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.health.record_upstream_success().await,
            Err(e) if e.is_upstream() => self.health.record_upstream_failure(&e.to_string()).await,
            Err(_) => {}
        }
        result
    }

    /// Turn a rendered page (or its failure) into a handler response.
    pub fn page(&self, rendered: Result<String>) -> std::result::Result<Html<String>, PageError> {
        match rendered {
            Ok(html) => {
                self.health.record_page();
                Ok(Html(html))
            }
            Err(e) => {
                self.health.record_error_page();
                Err(PageError(e))
            }
        }
    }
}
