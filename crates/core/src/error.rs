//! Error model shared by every core operation.

use thiserror::Error;

/// Result type used across the core crates.
pub type CoreResult<T> = Result<T, CoreError>;

/// Core-level error.
///
/// Every operation classifies its failures into exactly one of these
/// kinds before returning; raw parse or I/O failures never escape
/// unclassified. The presentation shell matches on the kind to choose
/// its message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required field was missing/empty, or a numeric field did not
    /// parse as a non-negative integer.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Registration attempted with a username that already exists.
    #[error("username '{0}' already exists")]
    DuplicateUser(String),

    /// Unknown username or wrong password. Deliberately one kind and
    /// one message for both cases, so login failures do not leak
    /// whether the username exists.
    #[error("invalid username or password")]
    Authentication,

    /// An update targeted a component that is not in the inventory.
    #[error("unknown component '{0}'")]
    NotFound(String),

    /// Backing document missing, unreadable, corrupt, or unwritable.
    #[error("storage failure at {path}: {message}")]
    Storage { path: String, message: String },
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser(username.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn storage(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
