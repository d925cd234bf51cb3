//! # webhook-core
//!
//! Core crate for webhook. Contains the hook model, the YAML-backed
//! config store, runtime settings, the notifier trait, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other webhook crates.

pub mod config;
pub mod error;
pub mod hook;
pub mod result;
pub mod store;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use hook::{ChatApp, HookRecord};
pub use result::AppResult;
pub use store::HookStore;
