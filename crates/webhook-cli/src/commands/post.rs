//! `post`: send a message through a webhook.

use std::path::Path;

use clap::Args;

use crate::output;
use webhook_core::AppResult;
use webhook_core::error::AppError;
use webhook_core::traits::Notifier;

/// Arguments for the post command
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Message text
    pub message: String,
    /// Webhook to use instead of the default
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the post command
pub async fn execute(
    args: &PostArgs,
    config_path: &Path,
    notifier: &dyn Notifier,
) -> AppResult<()> {
    let store = super::load_store(config_path)?;
    super::ensure_not_empty(&store)?;

    let name = match args.name.as_deref() {
        Some(name) => name,
        None => store.default_name().ok_or_else(AppError::default_not_set)?,
    };
    let hook = store
        .hook(name)
        .ok_or_else(|| AppError::name_not_found(name))?;

    tracing::info!(name = %hook.name, app = %hook.app, "posting message");
    notifier.post(hook, &args.message).await?;

    output::print_success(&format!("Message posted via '{}'", hook.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use webhook_core::{ErrorKind, HookStore};

    fn args(message: &str, name: Option<&str>) -> PostArgs {
        PostArgs {
            message: message.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_post_uses_default_hook() {
        let (_temp, path) = temp_config();
        write_fixture(&path);
        let notifier = RecordingNotifier::default();

        execute(&args("message", None), &path, &notifier)
            .await
            .expect("post");

        let sent = notifier.sent.lock().expect("lock");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.name, "test");
        assert_eq!(sent[0].0.url, "http://example.com/");
        assert_eq!(sent[0].0.channel, "test_channel");
        assert_eq!(sent[0].0.bot_name, "test_bot");
        assert_eq!(sent[0].1, "message");
    }

    #[tokio::test]
    async fn test_post_on_empty_config_fails() {
        let (_temp, path) = temp_config();
        let notifier = RecordingNotifier::default();

        let err = execute(&args("message", None), &path, &notifier)
            .await
            .expect_err("empty");

        assert_eq!(err.kind, ErrorKind::ConfigEmpty);
        assert!(notifier.sent.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_post_without_default_fails() {
        let (_temp, path) = temp_config();
        HookStore::default()
            .add("other", "http://o/", "c", "b", webhook_core::ChatApp::Slack)
            .dump(&path)
            .expect("dump");
        let notifier = RecordingNotifier::default();

        let err = execute(&args("message", None), &path, &notifier)
            .await
            .expect_err("no default");

        assert_eq!(err.kind, ErrorKind::DefaultNotSet);
    }

    #[tokio::test]
    async fn test_post_default_pointing_nowhere_fails() {
        let (_temp, path) = temp_config();
        write_fixture(&path).set_default("test2").dump(&path).expect("dump");
        let notifier = RecordingNotifier::default();

        let err = execute(&args("message", None), &path, &notifier)
            .await
            .expect_err("dangling default");

        assert_eq!(err.kind, ErrorKind::NameNotFound);
        assert!(err.message.contains("test2"));
    }

    #[tokio::test]
    async fn test_post_unknown_name_fails() {
        let (_temp, path) = temp_config();
        write_fixture(&path);
        let notifier = RecordingNotifier::default();

        let err = execute(&args("message", Some("test2")), &path, &notifier)
            .await
            .expect_err("missing");

        assert_eq!(err.kind, ErrorKind::NameNotFound);
        assert!(notifier.sent.lock().expect("lock").is_empty());
    }
}
