//! Branch ranking by most recent activity.
//!
//! A branch counts as active when any of three things happened recently:
//! a commit landed on its tip, somebody worked on it locally (its newest reflog
//! entry), or its upstream moved (the tip of the cached remote-tracking ref).
//! [`rank_branches`] fuses those signals into [`BranchRecord::activity_time`]
//! and orders the branches newest first.
//!
//! # Public API
//! - [`rank_branches`]: Run the full ranking against a [`Gateway`]
//! - [`activity_time`]: Fuse the candidate timestamps of one branch
//! - [`normalize_upstream`]: `refs/remotes/origin/x` → `origin/x`

use crate::core::{
    error::{GrecentError, Result},
    gateway::Gateway,
    state::{BranchRecord, Snapshot, Timestamp},
};

/// Latest of the candidates that are present.
///
/// Missing candidates are skipped rather than treated as the epoch, so they
/// can never pull a branch down. `None` only when every candidate is missing.
pub fn activity_time(
    tip: Option<Timestamp>,
    local_work: Option<Timestamp>,
    upstream_tip: Option<Timestamp>,
) -> Option<Timestamp> {
    [tip, local_work, upstream_tip].into_iter().flatten().max()
}

/// Strip the `refs/remotes/` prefix git sometimes prints for upstreams
pub fn normalize_upstream(upstream: &str) -> Option<String> {
    let upstream = upstream.trim();
    if upstream.is_empty() {
        return None;
    }
    Some(
        upstream
            .strip_prefix("refs/remotes/")
            .unwrap_or(upstream)
            .to_string(),
    )
}

/// Rank every local branch, most recently active first.
///
/// Runs one pass over the gateway: branch list, current branch, remote tips,
/// then one reflog lookup per branch. Ties keep the gateway's own order.
pub fn rank_branches(gateway: &dyn Gateway) -> Result<Snapshot> {
    let branches = gateway.list_local_branches()?;
    let current = gateway.current_branch();
    let remote_times = gateway.remote_ref_times();

    let mut records = Vec::with_capacity(branches.len());
    for branch in branches {
        let upstream = branch.upstream.as_deref().and_then(normalize_upstream);
        let upstream_tip = upstream
            .as_ref()
            .and_then(|name| remote_times.get(name))
            .copied();
        let local_work = gateway.latest_local_action_time(&branch.name);

        let activity = activity_time(branch.tip_time, local_work, upstream_tip)
            .ok_or_else(|| GrecentError::unreadable_timestamp(&branch.name))?;

        log::debug!(
            "{}: tip={:?} local={:?} upstream={:?} -> {}",
            branch.name,
            branch.tip_time,
            local_work,
            upstream_tip,
            activity
        );

        records.push(BranchRecord {
            is_current: current.as_deref() == Some(branch.name.as_str()),
            has_upstream: upstream.is_some(),
            name: branch.name,
            tip_commit_hash: branch.tip_hash,
            activity_time: activity,
        });
    }

    // Stable, so equal times keep the gateway's tip-time order
    records.sort_by(|a, b| b.activity_time.cmp(&a.activity_time));
    Ok(Snapshot::new(records))
}
