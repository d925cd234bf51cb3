//! CLI command definitions and dispatch.

pub mod add;
pub mod list;
pub mod post;
pub mod remove;
pub mod setdefault;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use webhook_core::config::Settings;
use webhook_core::config::paths::resolve_config_path;
use webhook_core::error::AppError;
use webhook_core::traits::Notifier;
use webhook_core::{AppResult, HookStore};

/// webhook — post messages to chat applications through named webhooks
#[derive(Debug, Parser)]
#[command(name = "webhook", version, about, long_about = None)]
pub struct Cli {
    /// Path to the hook config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new webhook
    Add(add::AddArgs),
    /// Make an existing webhook the default
    #[command(name = "setdefault")]
    SetDefault(setdefault::SetDefaultArgs),
    /// Delete a webhook
    Remove(remove::RemoveArgs),
    /// Show all webhooks
    List,
    /// Send a message through a webhook
    Post(post::PostArgs),
}

impl Cli {
    /// Resolve the config file this invocation works on.
    pub fn config_path(&self, settings: &Settings) -> AppResult<PathBuf> {
        resolve_config_path(self.config.as_deref(), settings.config_path.as_deref())
    }

    /// Execute the CLI command
    pub async fn execute(&self, settings: &Settings, notifier: &dyn Notifier) -> AppResult<()> {
        let config_path = self.config_path(settings)?;
        tracing::debug!(path = %config_path.display(), "using config file");

        match &self.command {
            Commands::Add(args) => add::execute(args, &config_path),
            Commands::SetDefault(args) => setdefault::execute(args, &config_path),
            Commands::Remove(args) => remove::execute(args, &config_path),
            Commands::List => list::execute(&config_path, self.format),
            Commands::Post(args) => post::execute(args, &config_path, notifier).await,
        }
    }
}

/// Helper: load the hook store
pub fn load_store(config_path: &Path) -> AppResult<HookStore> {
    HookStore::load(config_path)
}

/// Helper: fail with `ConfigEmpty` when there are no hooks
pub fn ensure_not_empty(store: &HookStore) -> AppResult<()> {
    if store.empty() {
        return Err(AppError::config_empty());
    }
    Ok(())
}

/// Helper: fail with `NameNotFound` unless `name` is a hook
pub fn ensure_exists(store: &HookStore, name: &str) -> AppResult<()> {
    if !store.contains(name) {
        return Err(AppError::name_not_found(name));
    }
    Ok(())
}
