use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CourtsideError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub nba_api: NbaApiConfig,
    pub image_search: ImageSearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for stylesheets and other static assets
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NbaApiConfig {
    /// Base URL of the statistics service (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// How many days back the "today" pages look by default
    #[serde(default = "default_days_ago")]
    pub default_days_ago: u32,
}

impl NbaApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_days_ago() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchConfig {
    /// Custom Search JSON endpoint
    pub base_url: String,
    /// API key; image lookups are disabled when unset
    #[serde(default)]
    pub api_key: Option<String>,
    /// Search engine id
    #[serde(default)]
    pub cx: Option<String>,
    pub timeout_ms: u64,
}

impl ImageSearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
            && self.cx.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files; console only when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> std::result::Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("nba_api.base_url", "http://localhost:8000")?
            .set_default("nba_api.timeout_ms", 15_000)?
            .set_default("nba_api.default_days_ago", 1)?
            .set_default(
                "image_search.base_url",
                "https://www.googleapis.com/customsearch/v1",
            )?
            .set_default("image_search.timeout_ms", 5_000)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("COURTSIDE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (COURTSIDE__NBA_API__BASE_URL, etc.)
            .add_source(
                Environment::with_prefix("COURTSIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Reject settings that would only fail later, at request time
    pub fn validate(&self) -> Result<()> {
        for (name, raw) in [
            ("nba_api.base_url", &self.nba_api.base_url),
            ("image_search.base_url", &self.image_search.base_url),
        ] {
            url::Url::parse(raw).map_err(|e| {
                CourtsideError::Validation(format!("{} is not a valid URL ({}): {}", name, raw, e))
            })?;
        }
        if self.nba_api.timeout_ms == 0 {
            return Err(CourtsideError::Validation(
                "nba_api.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.image_search.timeout_ms == 0 {
            return Err(CourtsideError::Validation(
                "image_search.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
