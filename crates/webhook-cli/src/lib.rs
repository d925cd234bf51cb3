//! Command-line interface for webhook.
//!
//! Exposes the clap command tree and the handlers behind it. The binary in
//! the workspace root parses arguments, builds a notifier, and calls
//! [`Cli::execute`].

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};

/// Exit status for every failed command.
pub const FAILED: i32 = 1;
