//! Execution of git commands requested by the session.
//!
//! [`execute`] is blocking and is meant to run off the event-loop thread; it
//! never returns an error; every failure is folded into an [`Outcome`] the
//! session turns into a status line.

use crate::core::{error::Result, gateway::Gateway, recency::rank_branches, state::Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Checkout(String),
    Delete(String),
    Merge(String),
    Refresh,
    FetchRefresh,
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Checkout(_) => "checkout",
            Command::Delete(_) => "delete",
            Command::Merge(_) => "merge",
            Command::Refresh => "refresh",
            Command::FetchRefresh => "fetch",
        }
    }

    /// Progress wording, e.g. "deleting topic"
    pub fn describe(&self) -> String {
        match self {
            Command::Checkout(name) => format!("checking out {name}"),
            Command::Delete(name) => format!("deleting {name}"),
            Command::Merge(name) => format!("merging {name}"),
            Command::Refresh => "refreshing".to_string(),
            Command::FetchRefresh => "fetching".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Succeeded, nothing to reload
    Done,
    /// Succeeded and a fresh ranking was taken
    Ranked(Snapshot),
    /// The action succeeded but ranking afterwards failed
    DoneButStale(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub command: Command,
    pub outcome: Outcome,
}

pub fn execute(command: Command, gateway: &dyn Gateway) -> Completion {
    log::debug!("Executing {command:?}");
    let outcome = match &command {
        Command::Checkout(name) => match gateway.checkout(name) {
            Ok(()) => Outcome::Done,
            Err(e) => Outcome::Failed(e.one_line()),
        },
        Command::Delete(name) => match delete_with_fallback(gateway, name) {
            Ok(()) => rerank(gateway),
            Err(e) => Outcome::Failed(e.one_line()),
        },
        Command::Merge(name) if gateway.current_branch().as_deref() == Some(name.as_str()) => {
            Outcome::Failed("already on this branch".to_string())
        }
        Command::Merge(name) => match gateway.merge_into_current(name) {
            Ok(()) => rerank(gateway),
            Err(e) => Outcome::Failed(e.one_line()),
        },
        Command::Refresh => rank(gateway),
        Command::FetchRefresh => {
            if let Err(e) = gateway.fetch_all() {
                log::warn!("Fetch failed, remote times may be stale: {e}");
            }
            rank(gateway)
        }
    };
    log::debug!("{} finished: {outcome:?}", command.verb());
    Completion { command, outcome }
}

/// Safe delete first; if git refuses, force once. The checked-out branch is
/// never forced.
pub fn delete_with_fallback(gateway: &dyn Gateway, branch: &str) -> Result<()> {
    let Err(safe_error) = gateway.delete_branch(branch, false) else {
        return Ok(());
    };
    if gateway.current_branch().as_deref() == Some(branch) {
        return Err(safe_error);
    }
    log::info!("Safe delete of {branch} refused ({safe_error}), forcing");
    gateway.delete_branch(branch, true)
}

fn rank(gateway: &dyn Gateway) -> Outcome {
    match rank_branches(gateway) {
        Ok(snapshot) => Outcome::Ranked(snapshot),
        Err(e) => Outcome::Failed(e.one_line()),
    }
}

fn rerank(gateway: &dyn Gateway) -> Outcome {
    match rank_branches(gateway) {
        Ok(snapshot) => Outcome::Ranked(snapshot),
        Err(e) => Outcome::DoneButStale(e.one_line()),
    }
}
