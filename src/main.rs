use clap::Parser;
use courtside::adapters::{GoogleImageSearch, NbaApiClient};
use courtside::api::{create_router, AppState};
use courtside::cli::{commands, output::OutputMode, Cli, Commands};
use courtside::config::AppConfig;
use courtside::error::{CourtsideError, Result};
use std::sync::Arc;
use tracing::{info, warn};

mod main_runtime;

use main_runtime::{init_logging, init_logging_simple, shutdown_signal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load_from(&cli.config_dir)?;
    config.validate()?;
    let mode = OutputMode::from_json_flag(cli.json);

    match &cli.command {
        None => {
            init_logging(&config.logging);
            run_server(config).await?;
        }
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = *port;
            }
            init_logging(&config.logging);
            run_server(config).await?;
        }
        Some(Commands::Player { name }) => {
            init_logging_simple();
            let client = NbaApiClient::new(&config.nba_api)?;
            commands::show_player(&client, name, mode).await?;
        }
        Some(Commands::Compare { first, second }) => {
            init_logging_simple();
            let client = NbaApiClient::new(&config.nba_api)?;
            commands::compare_players(&client, first, second, mode).await?;
        }
        Some(Commands::Leaders { stat, limit }) => {
            init_logging_simple();
            let client = NbaApiClient::new(&config.nba_api)?;
            commands::show_leaders(&client, stat, limit, mode).await?;
        }
        Some(Commands::Matches { days_ago }) => {
            init_logging_simple();
            let client = NbaApiClient::new(&config.nba_api)?;
            let days_ago = days_ago.unwrap_or(config.nba_api.default_days_ago);
            commands::show_matches(&client, days_ago, mode).await?;
        }
    }

    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let players = Arc::new(NbaApiClient::new(&config.nba_api)?);
    let images = Arc::new(GoogleImageSearch::new(&config.image_search)?);
    if !config.image_search.is_enabled() {
        warn!("image_search.api_key/cx not set, pages will render without pictures");
    }

    let state = AppState::new(players.clone(), images)
        .with_default_days_ago(config.nba_api.default_days_ago);
    let app = create_router(state, &config.server.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Courtside listening on http://{} (stats service: {})",
        addr,
        players.base_url()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CourtsideError::Internal(format!("Server error: {}", e)))?;

    info!("Shutdown complete");
    Ok(())
}
