//! `remove`: delete a webhook.

use std::path::Path;

use clap::Args;

use crate::output;
use webhook_core::AppResult;

/// Arguments for the remove command
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Name of the webhook to delete
    pub name: String,
}

/// Execute the remove command
pub fn execute(args: &RemoveArgs, config_path: &Path) -> AppResult<()> {
    let store = super::load_store(config_path)?;
    super::ensure_not_empty(&store)?;
    super::ensure_exists(&store, &args.name)?;

    store.remove(&args.name).dump(config_path)?;

    tracing::info!(name = %args.name, "webhook removed");
    output::print_success(&format!("Webhook '{}' removed", args.name));
    Ok(())
}
