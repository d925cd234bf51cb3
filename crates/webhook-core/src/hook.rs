//! Hook records and the chat applications they can point at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A chat application that accepts incoming webhooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatApp {
    /// Slack incoming webhooks.
    #[default]
    Slack,
    /// Discord channel webhooks.
    Discord,
}

impl ChatApp {
    /// The identifier written to the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::Discord => "discord",
        }
    }
}

impl fmt::Display for ChatApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatApp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slack" => Ok(Self::Slack),
            "discord" => Ok(Self::Discord),
            _ => Err(AppError::unsupported_app(s)),
        }
    }
}

/// One named webhook.
///
/// On disk the name is the mapping key, so it is skipped during
/// (de)serialization and filled in by the store after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRecord {
    /// Application identifier, e.g. `"slack"`.
    #[serde(default = "default_app")]
    pub app: String,
    /// Unique key of the hook.
    #[serde(skip)]
    pub name: String,
    /// Incoming webhook URL.
    pub url: String,
    /// Channel the message is posted to.
    pub channel: String,
    /// Display name the message is posted under.
    pub bot_name: String,
}

impl HookRecord {
    /// Build a record from its parts.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        channel: impl Into<String>,
        bot_name: impl Into<String>,
        app: ChatApp,
    ) -> Self {
        Self {
            app: app.as_str().to_string(),
            name: name.into(),
            url: url.into(),
            channel: channel.into(),
            bot_name: bot_name.into(),
        }
    }

    /// Parse the stored application string.
    pub fn chat_app(&self) -> AppResult<ChatApp> {
        self.app.parse()
    }
}

// Config files written before the `app` field existed only held slack hooks.
fn default_app() -> String {
    ChatApp::Slack.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_chat_app_parse_is_case_insensitive() {
        assert_eq!("Slack".parse::<ChatApp>().expect("parse"), ChatApp::Slack);
        assert_eq!(
            " DISCORD ".parse::<ChatApp>().expect("parse"),
            ChatApp::Discord
        );
    }

    #[test]
    fn test_chat_app_parse_rejects_unknown() {
        let err = "teams".parse::<ChatApp>().expect_err("unknown app");
        assert_eq!(err.kind, ErrorKind::UnsupportedApp);
    }

    #[test]
    fn test_record_without_app_defaults_to_slack() {
        let yaml = "url: http://example.com/\nchannel: general\nbot_name: bot\n";
        let record: HookRecord = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(record.app, "slack");
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_record_serialization_omits_name() {
        let record = HookRecord::new("test", "http://example.com/", "general", "bot", ChatApp::Slack);
        let yaml = serde_yaml::to_string(&record).expect("serialize");
        assert!(!yaml.contains("name: test"));
        assert!(yaml.contains("bot_name: bot"));
    }
}
