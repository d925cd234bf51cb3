//! YAML-backed store of named hooks.
//!
//! The file is a single top-level mapping. The optional `default` key holds
//! the name of the default hook; every other key is a hook name mapping to
//! its record:
//!
//! ```yaml
//! default: test
//! test:
//!   app: slack
//!   url: http://example.com/
//!   channel: general
//!   bot_name: bot
//! ```
//!
//! The store is loaded fresh for every command and written back whole, so
//! mutators consume the store and hand back the updated value.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, ErrorKind};
use crate::hook::{ChatApp, HookRecord};
use crate::result::AppResult;

/// Top-level key holding the default hook name.
pub const DEFAULT_HOOK_KEY: &str = "default";

/// Names that can never be given to a hook.
pub const RESERVED_WORDS: [&str; 2] = [DEFAULT_HOOK_KEY, ""];

/// On-disk shape of the config file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(flatten)]
    hooks: BTreeMap<String, HookRecord>,
}

/// Named hooks plus the current default pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookStore {
    default: Option<String>,
    hooks: BTreeMap<String, HookRecord>,
}

impl HookStore {
    /// Load the store from `path`.
    ///
    /// A missing file is created empty (along with its parent directories)
    /// and yields an empty store.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, creating it");
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("failed to create {}", dir.display()),
                        e,
                    )
                })?;
            }
            std::fs::File::create(path).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("failed to create {}", path.display()),
                    e,
                )
            })?;
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("failed to read {}", path.display()),
                e,
            )
        })?;
        let store = Self::from_yaml(&content)?;
        debug!(path = %path.display(), hooks = store.len(), "config loaded");
        Ok(store)
    }

    /// Parse a store from YAML text.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: Option<ConfigFile> = serde_yaml::from_str(content)?;
        let file = file.unwrap_or_default();

        let hooks = file
            .hooks
            .into_iter()
            .map(|(name, record)| {
                let record = HookRecord {
                    name: name.clone(),
                    ..record
                };
                (name, record)
            })
            .collect();

        Ok(Self {
            default: file.default.filter(|name| !name.is_empty()),
            hooks,
        })
    }

    /// Render the store as YAML text.
    pub fn to_yaml(&self) -> AppResult<String> {
        let file = ConfigFile {
            default: self.default.clone(),
            hooks: self.hooks.clone(),
        };
        serde_yaml::to_string(&file).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("failed to serialize config: {e}"),
                e,
            )
        })
    }

    /// Write the whole store to `path`, replacing its contents.
    pub fn dump(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("failed to create {}", dir.display()),
                    e,
                )
            })?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("failed to write {}", path.display()),
                e,
            )
        })?;
        debug!(path = %path.display(), hooks = self.len(), "config written");
        Ok(())
    }

    /// Whether `name` collides with an internal key.
    pub fn is_reserved(name: &str) -> bool {
        RESERVED_WORDS.contains(&name)
    }

    /// True when there are no hooks, whether or not a default is set.
    pub fn empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Same as [`HookStore::empty`].
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether a hook called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// The default hook name, if one is set.
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Look up a hook by name.
    pub fn hook(&self, name: &str) -> Option<&HookRecord> {
        self.hooks.get(name)
    }

    /// All hooks in name order.
    pub fn hooks(&self) -> impl Iterator<Item = &HookRecord> {
        self.hooks.values()
    }

    /// Insert a hook, replacing any record with the same name.
    #[must_use]
    pub fn add(
        mut self,
        name: &str,
        url: &str,
        channel: &str,
        bot_name: &str,
        app: ChatApp,
    ) -> Self {
        self.hooks.insert(
            name.to_string(),
            HookRecord::new(name, url, channel, bot_name, app),
        );
        self
    }

    /// Point the default at `name`. Existence is the caller's concern.
    #[must_use]
    pub fn set_default(mut self, name: &str) -> Self {
        self.default = Some(name.to_string()).filter(|n| !n.is_empty());
        self
    }

    /// Drop the hook called `name`, clearing the default if it pointed there.
    #[must_use]
    pub fn remove(mut self, name: &str) -> Self {
        self.hooks.remove(name);
        if self.default.as_deref() == Some(name) {
            self.default = None;
        }
        self
    }
}
