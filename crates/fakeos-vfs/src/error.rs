//! Error types for the file store

use serde::{Deserialize, Serialize};

/// Errors from file store operations.
///
/// Every variant names the offending file so callers can render a
/// user-facing message without extra lookups. None of these are fatal;
/// the desktop surfaces them as terminal output lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// Name is not in the active file list
    NotFound(String),
    /// Name is not in the recycle bin
    NotInRecycle(String),
    /// Name already exists in the active list or the recycle bin
    AlreadyExists(String),
    /// File names must be non-empty
    EmptyName,
}

impl FsError {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a not-in-recycle error.
    pub fn not_in_recycle(name: impl Into<String>) -> Self {
        Self::NotInRecycle(name.into())
    }

    /// Create an already-exists error.
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    /// Check if this is a "not found" error (either collection).
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_) | FsError::NotInRecycle(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let err = FsError::not_found("ghost.txt");
        match err {
            FsError::NotFound(name) => assert_eq!(name, "ghost.txt"),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_is_not_found() {
        assert!(FsError::not_found("a").is_not_found());
        assert!(FsError::not_in_recycle("a").is_not_found());
        assert!(!FsError::already_exists("a").is_not_found());
        assert!(!FsError::EmptyName.is_not_found());
    }
}
