//! Output formatting for the lookup commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render a slice of Tabled + Serialize rows in the chosen mode.
pub fn render_items<T: Tabled + Serialize>(
    items: &[T],
    mode: OutputMode,
) -> anyhow::Result<String> {
    Ok(match mode {
        OutputMode::Table if items.is_empty() => "(no results)".to_string(),
        OutputMode::Table => Table::new(items).to_string(),
        OutputMode::Json => serde_json::to_string_pretty(items)?,
    })
}

/// Print a slice of rows in the chosen mode.
pub fn print_items<T: Tabled + Serialize>(items: &[T], mode: OutputMode) -> anyhow::Result<()> {
    println!("{}", render_items(items, mode)?);
    Ok(())
}
