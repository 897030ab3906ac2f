//! Core functionality for grecent.
//!
//! This module provides the repository access layer, the recency ranking, the
//! display projection, error handling and configuration.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod gateway;
pub mod git;
pub mod output;
pub mod recency;
pub mod render;
pub mod state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GrecentError, Result};

// === Repository access ===
// The gateway contract and its git-backed implementation
pub use gateway::{Gateway, LocalBranch};
pub use git::GitRepo;

// === Ranking ===
// Activity time fusion and the ordered snapshot it produces
pub use recency::{activity_time, rank_branches};
pub use state::{BranchRecord, Snapshot, Timestamp};

// === Display ===
// Rows and humanized ages shared by the table and the plain listing
pub use render::{humanize_age, humanize_since, BranchRow};

// === Configuration ===
pub use config::Config;

// === Output formatting ===
pub use colors::format_branch_line;
pub use output::{print_error, print_info};
