//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GrecentError`] which covers every failure grecent can
//! report. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`GrecentError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GrecentError>`
//!
//! # Error Categories
//! - **Setup**: Repository not found, unreadable timestamps, bad configuration
//! - **Git commands**: Checkout, delete, merge and fetch failures with git's own message
//! - **I/O**: Terminal and file system errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for grecent
#[derive(Error, Debug)]
pub enum GrecentError {
    // Repository errors
    #[error("not a git repository (or any of the parent directories): .git")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("Branch name is not valid UTF-8")]
    InvalidUtf8BranchName,

    // Ranking errors
    #[error("parse date for {branch}: no readable timestamp")]
    UnreadableTimestamp { branch: String },

    // Git command errors
    #[error("{message}")]
    GitCommandFailed { command: String, message: String },

    // Configuration errors
    #[error("Cannot locate the home directory")]
    NoHomeDirectory,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GrecentError
pub type Result<T> = std::result::Result<T, GrecentError>;

impl GrecentError {
    /// Create an error for a branch whose activity time could not be determined
    pub fn unreadable_timestamp(branch: impl Into<String>) -> Self {
        Self::UnreadableTimestamp {
            branch: branch.into(),
        }
    }

    /// Create a git command failure carrying git's own diagnostic
    pub fn git_command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Collapse the error into a single line suitable for a status bar
    pub fn one_line(&self) -> String {
        self.to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
