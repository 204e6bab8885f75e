//! Health and metrics endpoints
//!
//! Liveness and readiness probes for process supervision, a JSON health
//! summary, and a Prometheus text endpoint. Upstream health is inferred from
//! the outcome of the calls made while serving pages.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Health status for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Component health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check: Option<DateTime<Utc>>,
}

/// Overall system health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
}

#[derive(Debug, Default)]
struct UpstreamTrack {
    last_success: Option<DateTime<Utc>>,
    last_failure: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

/// Shared health state, updated by request handlers
pub struct HealthState {
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Pages rendered successfully
    pub pages_rendered: AtomicU64,
    /// Requests answered with an error page
    pub error_pages: AtomicU64,
    /// Upstream calls that failed
    pub upstream_failures: AtomicU64,
    upstream: RwLock<UpstreamTrack>,
    /// A failure newer than this (and newer than the last success) degrades health
    pub failure_window_secs: i64,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            pages_rendered: AtomicU64::new(0),
            error_pages: AtomicU64::new(0),
            upstream_failures: AtomicU64::new(0),
            upstream: RwLock::new(UpstreamTrack::default()),
            failure_window_secs: 60,
        }
    }

    pub fn record_page(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error_page(&self) {
        self.error_pages.fetch_add(1, Ordering::Relaxed);
    }

    pub async fn record_upstream_success(&self) {
        self.upstream.write().await.last_success = Some(Utc::now());
    }

    pub async fn record_upstream_failure(&self, reason: &str) {
        warn!(reason, "upstream call failed");
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
        let mut track = self.upstream.write().await;
        track.last_failure = Some(Utc::now());
        track.last_error = Some(reason.to_string());
    }

    fn upstream_component(&self, track: &UpstreamTrack, now: DateTime<Utc>) -> ComponentHealth {
        let recent_failure = match (track.last_failure, track.last_success) {
            (Some(failed), success) => {
                (now - failed).num_seconds() < self.failure_window_secs
                    && success.map_or(true, |ok| ok < failed)
            }
            (None, _) => false,
        };

        ComponentHealth {
            name: "upstream".to_string(),
            status: if recent_failure {
                HealthStatus::Degraded
            } else {
                HealthStatus::Healthy
            },
            message: if recent_failure {
                track.last_error.clone()
            } else {
                None
            },
            last_check: track.last_success.max(track.last_failure),
        }
    }

    /// Get overall health status
    pub async fn get_health(&self) -> HealthResponse {
        let now = Utc::now();
        let track = self.upstream.read().await;
        let upstream = self.upstream_component(&track, now);

        let status = upstream.status;

        HealthResponse {
            status,
            timestamp: now,
            uptime_seconds: (now - self.started_at).num_seconds().max(0) as u64,
            components: vec![upstream],
        }
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes for `/health`, `/healthz`, `/readyz` and `/metrics`
pub fn health_routes<S>(state: Arc<HealthState>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/healthz", get(liveness_handler))
        .route("/readyz", get(readiness_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Full health check endpoint; degraded still answers 200
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.get_health().await))
}

/// Liveness probe - is the process alive?
async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe - forms render without upstreams, so always ready once bound
async fn readiness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Prometheus metrics endpoint
async fn metrics_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let health = state.get_health().await;
    let up = if health.status.is_healthy() { 1 } else { 0 };

    let metrics = format!(
        r#"# HELP courtside_up Upstream health (1=healthy, 0=degraded)
# TYPE courtside_up gauge
courtside_up {}

# HELP courtside_uptime_seconds Uptime in seconds
# TYPE courtside_uptime_seconds counter
courtside_uptime_seconds {}

# HELP courtside_pages_rendered_total Pages rendered successfully
# TYPE courtside_pages_rendered_total counter
courtside_pages_rendered_total {}

# HELP courtside_error_pages_total Requests answered with an error page
# TYPE courtside_error_pages_total counter
courtside_error_pages_total {}

# HELP courtside_upstream_failures_total Failed upstream calls
# TYPE courtside_upstream_failures_total counter
courtside_upstream_failures_total {}
"#,
        up,
        health.uptime_seconds,
        state.pages_rendered.load(Ordering::Relaxed),
        state.error_pages.load(Ordering::Relaxed),
        state.upstream_failures.load(Ordering::Relaxed),
    );

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        metrics,
    )
}
