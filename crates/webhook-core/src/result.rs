//! Convenience result type alias for webhook.

use crate::error::AppError;

/// A specialized `Result` type for webhook operations.
pub type AppResult<T> = Result<T, AppError>;
