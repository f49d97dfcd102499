// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmt application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmt operations.
#[derive(Error, Debug)]
pub enum CmtError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CmtError {
    fn from(err: dialoguer::Error) -> Self {
        CmtError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Commit-message-related errors.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Unknown commit type: '{commit_type}'")]
    UnknownType { commit_type: String },

    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Commit message format is invalid: {message}")]
    InvalidFormat { message: String },
}

/// Result type alias for cmt operations.
pub type Result<T> = std::result::Result<T, CmtError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmtError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_message_error_display() {
        let err = MessageError::UnknownType {
            commit_type: "feature".to_string(),
        };
        assert!(err.to_string().contains("feature"));
    }

    #[test]
    fn test_cmt_error_from_git_error() {
        let git_err = GitError::NotARepository;
        let cmt_err: CmtError = git_err.into();
        assert!(cmt_err.to_string().contains("Not a git repository"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("reading manifest").unwrap_err();
        assert!(err.to_string().contains("reading manifest"));
    }
}
