//! `list`: show the default marker and every webhook.

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use webhook_core::{AppResult, HookRecord, HookStore};

/// Webhook display row for table and JSON output
#[derive(Debug, Serialize, Tabled)]
struct HookRow {
    /// Default marker
    #[tabled(rename = "")]
    #[serde(rename = "default")]
    marker: String,
    /// Name
    name: String,
    /// Application
    application: String,
    /// URL
    url: String,
    /// Channel
    channel: String,
    /// Bot name
    bot_name: String,
}

impl HookRow {
    fn new(hook: &HookRecord, default: Option<&str>) -> Self {
        let is_default = default == Some(hook.name.as_str());
        Self {
            marker: if is_default { "*".to_string() } else { String::new() },
            name: hook.name.clone(),
            application: hook.app.clone(),
            url: hook.url.clone(),
            channel: hook.channel.clone(),
            bot_name: hook.bot_name.clone(),
        }
    }
}

/// JSON document for `--format json`
#[derive(Debug, Serialize)]
struct ListDocument<'a> {
    default: Option<&'a str>,
    hooks: Vec<HookRow>,
}

/// Render the store in `format`.
///
/// The plain format is one `*<default>` line followed by four
/// `<name>.<field> = <value>` lines per webhook.
pub fn render(store: &HookStore, format: OutputFormat) -> String {
    let default = store.default_name();
    match format {
        OutputFormat::Plain => {
            let mut lines = vec![format!("*{}", default.unwrap_or_default())];
            for hook in store.hooks() {
                lines.push(format!("{}.application = {}", hook.name, hook.app));
                lines.push(format!("{}.url = {}", hook.name, hook.url));
                lines.push(format!("{}.channel = {}", hook.name, hook.channel));
                lines.push(format!("{}.bot_name = {}", hook.name, hook.bot_name));
            }
            lines.join("\n")
        }
        OutputFormat::Table => {
            let rows: Vec<HookRow> = store.hooks().map(|h| HookRow::new(h, default)).collect();
            output::render_table(&rows)
        }
        OutputFormat::Json => output::render_json(&ListDocument {
            default,
            hooks: store.hooks().map(|h| HookRow::new(h, default)).collect(),
        }),
    }
}

/// Execute the list command
pub fn execute(config_path: &Path, format: OutputFormat) -> AppResult<()> {
    let store = super::load_store(config_path)?;
    super::ensure_not_empty(&store)?;

    println!("{}", render(&store, format));
    store.dump(config_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use webhook_core::{ChatApp, ErrorKind};

    #[test]
    fn test_plain_output_lines() {
        let (_temp, path) = temp_config();
        let store = write_fixture(&path);

        let text = render(&store, OutputFormat::Plain);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "*test",
                "test.application = slack",
                "test.url = http://example.com/",
                "test.channel = test_channel",
                "test.bot_name = test_bot",
            ]
        );
    }

    #[test]
    fn test_plain_output_without_default_has_bare_marker() {
        let store = HookStore::default().add("a", "http://a/", "c", "b", ChatApp::Discord);

        let text = render(&store, OutputFormat::Plain);

        assert_eq!(text.lines().next(), Some("*"));
        assert!(text.contains("a.application = discord"));
    }

    #[test]
    fn test_json_output_marks_default() {
        let store = HookStore::default()
            .add("a", "http://a/", "c", "b", ChatApp::Slack)
            .add("b", "http://b/", "c", "b", ChatApp::Slack)
            .set_default("b");

        let value: serde_json::Value =
            serde_json::from_str(&render(&store, OutputFormat::Json)).expect("json");

        assert_eq!(value["default"], "b");
        assert_eq!(value["hooks"][0]["name"], "a");
        assert_eq!(value["hooks"][0]["default"], "");
        assert_eq!(value["hooks"][1]["default"], "*");
    }

    #[test]
    fn test_table_output_contains_hook() {
        let store = HookStore::default().add("ops", "http://ops/", "alerts", "pager", ChatApp::Slack);

        let table = render(&store, OutputFormat::Table);

        assert!(table.contains("ops"));
        assert!(table.contains("alerts"));
    }

    #[test]
    fn test_list_on_empty_config_fails() {
        let (_temp, path) = temp_config();

        let err = execute(&path, OutputFormat::Plain).expect_err("empty");

        assert_eq!(err.kind, ErrorKind::ConfigEmpty);
    }

    #[test]
    fn test_list_rewrites_unchanged_store() {
        let (_temp, path) = temp_config();
        let store = write_fixture(&path);

        execute(&path, OutputFormat::Plain).expect("list");

        assert_eq!(HookStore::load(&path).expect("load"), store);
    }
}
