//! Request bodies for each chat application.

use serde_json::{Value, json};

use webhook_core::{ChatApp, HookRecord};

/// Build the JSON body posted to `hook.url`.
///
/// Discord webhooks are bound to one channel, so the stored channel is only
/// sent to Slack.
pub fn build_payload(app: ChatApp, hook: &HookRecord, message: &str) -> Value {
    match app {
        ChatApp::Slack => json!({
            "channel": hook.channel,
            "username": hook.bot_name,
            "text": message,
        }),
        ChatApp::Discord => json!({
            "username": hook.bot_name,
            "content": message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook(app: ChatApp) -> HookRecord {
        HookRecord::new("test", "http://example.com/", "general", "bot", app)
    }

    #[test]
    fn test_slack_payload() {
        let body = build_payload(ChatApp::Slack, &hook(ChatApp::Slack), "hello");
        assert_eq!(
            body,
            json!({"channel": "general", "username": "bot", "text": "hello"})
        );
    }

    #[test]
    fn test_discord_payload_has_no_channel() {
        let body = build_payload(ChatApp::Discord, &hook(ChatApp::Discord), "hello");
        assert_eq!(body, json!({"username": "bot", "content": "hello"}));
        assert!(body.get("channel").is_none());
    }
}
