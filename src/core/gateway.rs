//! Contract between grecent and the version-control tool.
//!
//! The recency engine and the interactive session only talk to git through
//! [`Gateway`], so both can run against [`GitRepo`](crate::core::git::GitRepo)
//! in production and against scripted data in tests.

use crate::core::{error::Result, state::Timestamp};
use std::collections::HashMap;

/// Raw description of one local branch as git reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    pub tip_hash: String,
    /// Committer time of the tip commit; `None` when it could not be read
    pub tip_time: Option<Timestamp>,
    /// Configured upstream, e.g. `origin/feature` or `refs/remotes/origin/feature`
    pub upstream: Option<String>,
}

pub trait Gateway: Send + Sync {
    /// Local branches ordered by tip time, newest first
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>>;

    /// Checked-out branch, `None` on a detached or unborn HEAD
    fn current_branch(&self) -> Option<String>;

    /// Time of the newest reflog entry of `branch`
    fn latest_local_action_time(&self, branch: &str) -> Option<Timestamp>;

    /// Tip times of every cached remote-tracking ref, keyed like `origin/feature`
    fn remote_ref_times(&self) -> HashMap<String, Timestamp>;

    fn fetch_all(&self) -> Result<()>;

    fn checkout(&self, branch: &str) -> Result<()>;

    fn delete_branch(&self, branch: &str, force: bool) -> Result<()>;

    fn merge_into_current(&self, branch: &str) -> Result<()>;
}
