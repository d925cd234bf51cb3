//! webhook — manage named chat webhooks and post messages through them.
//!
//! Main entry point that wires settings, logging, the HTTP notifier and the
//! command layer together.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use webhook_cli::{Cli, FAILED};
use webhook_client::WebhookNotifier;
use webhook_core::config::Settings;
use webhook_core::config::logging::LoggingConfig;
use webhook_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(FAILED);
        }
    };

    init_logging(&settings.logging);

    if let Err(e) = run(&cli, &settings).await {
        tracing::debug!(kind = %e.kind, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(FAILED);
    }
}

/// Initialize tracing/logging on stderr so command output stays on stdout
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Build the notifier and run the selected command
async fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let notifier = WebhookNotifier::new(settings.timeout())?;
    cli.execute(settings, &notifier).await
}
