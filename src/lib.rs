//! grecent - list and switch between recently active git branches.
//!
//! Every local branch gets one "last activity" time fused from its tip commit,
//! its reflog and its upstream's remote-tracking tip. Branches are ranked by
//! that time and shown as plain text, JSON, or an interactive table that can
//! search, sort, check out, delete, merge and fetch.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository access through the [`Gateway`] trait and [`GitRepo`]
//! - Ranking ([`rank_branches`]) into an immutable [`Snapshot`]
//! - Display rows and humanized ages
//! - Error handling and result types
//!
//! The interactive model lives in [`session`] and is independent of the
//! terminal; [`tui`] wires it to crossterm and ratatui.

pub mod commands;
pub mod core;
pub mod session;
pub mod tui;

// Re-export the core public API for external users
pub use core::{
    activity_time,
    // Display
    humanize_age,
    humanize_since,
    // Ranking
    rank_branches,
    BranchRecord,
    BranchRow,
    // Configuration
    Config,
    // Repository access
    Gateway,
    GitRepo,
    // Error handling
    GrecentError,
    LocalBranch,
    Result,
    Snapshot,
    Timestamp,
};
