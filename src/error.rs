use thiserror::Error;

use crate::domain::StatCode;

/// Main error type for the front-end
#[derive(Error, Debug)]
pub enum CourtsideError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream {service} unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    // Stat computation errors
    #[error(transparent)]
    Stat(#[from] StatError),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CourtsideError {
    pub fn upstream(service: &str, reason: impl Into<String>) -> Self {
        CourtsideError::UpstreamUnavailable {
            service: service.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by an upstream service rather than local input.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CourtsideError::UpstreamUnavailable { .. } | CourtsideError::Http(_)
        )
    }
}

/// Result type alias for CourtsideError
pub type Result<T> = std::result::Result<T, CourtsideError>;

/// Deterministic errors raised while shaping stats for display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("Per-game {stat} is undefined: games played is zero")]
    DivisionUndefined { stat: StatCode },

    #[error("Non-finite value for {stat}")]
    NonFiniteValue { stat: StatCode },

    #[error("Malformed matchup label: {label:?} (expected \"TeamA vs TeamB\")")]
    MalformedMatchupLabel { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_upstream_json_is_an_upstream_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CourtsideError::upstream("nba_api", format!("invalid JSON: {}", parse_err));
        assert!(err.is_upstream());
        assert!(err.to_string().starts_with("Upstream nba_api unavailable"));
    }

    #[test]
    fn test_local_failures_are_not_upstream() {
        assert!(!CourtsideError::Validation("Invalid limit".into()).is_upstream());
        assert!(!CourtsideError::from(StatError::DivisionUndefined { stat: StatCode::Pts })
            .is_upstream());
        assert!(!CourtsideError::from(anyhow::anyhow!("table render failed")).is_upstream());
    }
}
