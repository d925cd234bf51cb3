//! `setdefault`: choose the webhook `post` uses when no name is given.

use std::path::Path;

use clap::Args;

use crate::output;
use webhook_core::AppResult;

/// Arguments for the setdefault command
#[derive(Debug, Args)]
pub struct SetDefaultArgs {
    /// Name of an existing webhook
    pub name: String,
}

/// Execute the setdefault command
pub fn execute(args: &SetDefaultArgs, config_path: &Path) -> AppResult<()> {
    let store = super::load_store(config_path)?;
    super::ensure_not_empty(&store)?;
    super::ensure_exists(&store, &args.name)?;

    store.set_default(&args.name).dump(config_path)?;

    tracing::info!(name = %args.name, "default webhook set");
    output::print_success(&format!("Default webhook set to '{}'", args.name));
    Ok(())
}
