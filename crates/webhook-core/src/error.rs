//! Unified application error types for webhook.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The name collides with an internal bookkeeping key.
    ReservedName,
    /// A hook with this name already exists.
    DuplicateName,
    /// No hook with this name exists.
    NameNotFound,
    /// The store holds no hooks at all.
    ConfigEmpty,
    /// No name was given and no default hook is set.
    DefaultNotSet,
    /// The hook's application is not one we can post to.
    UnsupportedApp,
    /// The config file could not be parsed.
    Parse,
    /// A file system I/O error occurred.
    Storage,
    /// A serialization error occurred.
    Serialization,
    /// Runtime settings or path resolution failed.
    Configuration,
    /// The chat application rejected the request or could not be reached.
    ExternalService,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedName => write!(f, "RESERVED_NAME"),
            Self::DuplicateName => write!(f, "DUPLICATE_NAME"),
            Self::NameNotFound => write!(f, "NAME_NOT_FOUND"),
            Self::ConfigEmpty => write!(f, "CONFIG_EMPTY"),
            Self::DefaultNotSet => write!(f, "DEFAULT_NOT_SET"),
            Self::UnsupportedApp => write!(f, "UNSUPPORTED_APP"),
            Self::Parse => write!(f, "PARSE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
        }
    }
}

/// The unified application error used throughout webhook.
///
/// Every failure ends up as exactly one of these, and `main` turns it into a
/// single stderr line plus a non-zero exit status.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// `name` is one of the reserved words.
    pub fn reserved_name(name: &str) -> Self {
        Self::new(ErrorKind::ReservedName, format!("'{name}' is reserved"))
    }

    /// `name` is already taken by another hook.
    pub fn duplicate_name(name: &str) -> Self {
        Self::new(ErrorKind::DuplicateName, format!("'{name}' already exists"))
    }

    /// `name` does not refer to any hook.
    pub fn name_not_found(name: &str) -> Self {
        Self::new(ErrorKind::NameNotFound, format!("'{name}' does not exist"))
    }

    /// The store has no hooks.
    pub fn config_empty() -> Self {
        Self::new(ErrorKind::ConfigEmpty, "no webhooks configured")
    }

    /// `post` was called without a name and there is no default.
    pub fn default_not_set() -> Self {
        Self::new(ErrorKind::DefaultNotSet, "default webhook is not set")
    }

    /// The application string does not name a supported chat application.
    pub fn unsupported_app(app: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedApp,
            format!("'{app}' is not a supported application"),
        )
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an external service error.
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::with_source(ErrorKind::Parse, format!("malformed config: {err}"), err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
