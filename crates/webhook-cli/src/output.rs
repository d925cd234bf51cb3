//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `key = value` lines
    #[default]
    Plain,
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Render a list of rows as a table
pub fn render_table<T: Tabled>(items: &[T]) -> String {
    if items.is_empty() {
        "No results found.".to_string()
    } else {
        Table::new(items).to_string()
    }
}

/// Render any serializable value as pretty JSON
pub fn render_json<T: Serialize>(item: &T) -> String {
    serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}
