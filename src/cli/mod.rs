//! Courtside command line
//!
//! Commands:
//! - `courtside serve` - Run the web front-end (default)
//! - `courtside player` - Per-game stats for one player
//! - `courtside compare` - Two players side by side
//! - `courtside leaders` - League leaders for a stat category
//! - `courtside matches` - Scores for a day's games

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Courtside NBA stats front-end
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(author, version, about = "Server-rendered NBA statistics front-end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding default.toml and environment overrides
    #[arg(long, global = true, default_value = "config", env = "COURTSIDE_CONFIG_DIR")]
    pub config_dir: String,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web front-end
    Serve {
        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Per-game stats for the first player matching NAME
    Player { name: String },
    /// Compare two players' per-game stats
    Compare { first: String, second: String },
    /// League leaders for a stat category
    Leaders {
        /// PTS, REB, AST, STL, BLK, FG3M, FG3_PCT, FGM, FG_PCT
        #[arg(short, long, default_value = "PTS")]
        stat: String,
        /// 5, 10, 20, 50 or 100
        #[arg(short, long, default_value = "5")]
        limit: String,
    },
    /// Scores for the games played DAYS_AGO days back
    Matches {
        #[arg(short, long)]
        days_ago: Option<u32>,
    },
}
