//! Result type aliases.

use crate::UserdirError;

/// A specialized `Result` type for userdir operations.
pub type UserdirResult<T> = Result<T, UserdirError>;
