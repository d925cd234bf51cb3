//! `add`: register a new webhook.

use std::path::Path;

use clap::Args;

use crate::output;
use webhook_core::error::AppError;
use webhook_core::{AppResult, ChatApp, HookStore};

/// Arguments for the add command
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Unique name of the webhook
    pub name: String,
    /// Incoming webhook URL
    pub url: String,
    /// Channel to post to
    pub channel: String,
    /// Name the bot posts under
    pub bot_name: String,
    /// Chat application: slack, discord
    #[arg(short, long, default_value = "slack")]
    pub app: ChatApp,
    /// Make this webhook the default (implied when no default is set)
    #[arg(short, long)]
    pub default: bool,
}

/// Execute the add command
pub fn execute(args: &AddArgs, config_path: &Path) -> AppResult<()> {
    let store = super::load_store(config_path)?;

    if HookStore::is_reserved(&args.name) {
        return Err(AppError::reserved_name(&args.name));
    }
    if store.contains(&args.name) {
        return Err(AppError::duplicate_name(&args.name));
    }

    // A hook added while nothing is the default becomes the default.
    let make_default = args.default || store.default_name().is_none();
    let mut store = store.add(
        &args.name,
        &args.url,
        &args.channel,
        &args.bot_name,
        args.app,
    );
    if make_default {
        store = store.set_default(&args.name);
    }
    store.dump(config_path)?;

    tracing::info!(name = %args.name, app = %args.app, default = make_default, "webhook added");
    output::print_success(&format!("Webhook '{}' added", args.name));
    Ok(())
}
