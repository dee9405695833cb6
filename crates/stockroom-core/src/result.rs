//! Convenience result type alias for Stockroom.

use crate::error::AppError;

/// A specialized `Result` type for Stockroom operations.
///
/// Every crate returns this instead of spelling out `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
