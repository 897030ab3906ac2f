//! Scripted in-memory gateway.
//!
//! Branch data is fixed up front; mutations are recorded, and deletes really
//! remove the branch so a re-rank sees the change.

#![allow(dead_code)]

use chrono::DateTime;
use grecent::core::{
    error::{GrecentError, Result},
    gateway::{Gateway, LocalBranch},
    state::Timestamp,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn ts(rfc3339: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid test timestamp")
}

#[derive(Debug, Default)]
pub struct FakeGateway {
    branches: Mutex<Vec<LocalBranch>>,
    current: Mutex<Option<String>>,
    reflog: HashMap<String, Timestamp>,
    remotes: HashMap<String, Timestamp>,
    unmerged: Vec<String>,
    merge_error: Option<String>,
    listing_error: Mutex<Option<String>>,
    pub delete_calls: Mutex<Vec<(String, bool)>>,
    pub fetch_calls: Mutex<usize>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(self, name: &str, tip: &str) -> Self {
        self.branch_with(name, Some(ts(tip)), None)
    }

    pub fn branch_with(self, name: &str, tip: Option<Timestamp>, upstream: Option<&str>) -> Self {
        let hash = format!("{:0<40}", name.len());
        self.branches.lock().unwrap().push(LocalBranch {
            name: name.to_string(),
            tip_hash: hash,
            tip_time: tip,
            upstream: upstream.map(str::to_string),
        });
        self
    }

    pub fn current(self, name: &str) -> Self {
        *self.current.lock().unwrap() = Some(name.to_string());
        self
    }

    pub fn reflog(mut self, name: &str, time: &str) -> Self {
        self.reflog.insert(name.to_string(), ts(time));
        self
    }

    pub fn remote(mut self, name: &str, time: &str) -> Self {
        self.remotes.insert(name.to_string(), ts(time));
        self
    }

    /// Safe delete of `name` is refused as "not fully merged"
    pub fn unmerged(mut self, name: &str) -> Self {
        self.unmerged.push(name.to_string());
        self
    }

    pub fn failing_merge(mut self, message: &str) -> Self {
        self.merge_error = Some(message.to_string());
        self
    }

    pub fn fail_listing(&self, message: Option<&str>) {
        *self.listing_error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn branch_names(&self) -> Vec<String> {
        self.branches
            .lock()
            .unwrap()
            .iter()
            .map(|b| b.name.clone())
            .collect()
    }
}

impl Gateway for FakeGateway {
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>> {
        if let Some(message) = self.listing_error.lock().unwrap().clone() {
            return Err(GrecentError::git_command_failed("list", message));
        }
        Ok(self.branches.lock().unwrap().clone())
    }

    fn current_branch(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    fn latest_local_action_time(&self, branch: &str) -> Option<Timestamp> {
        self.reflog.get(branch).copied()
    }

    fn remote_ref_times(&self) -> HashMap<String, Timestamp> {
        self.remotes.clone()
    }

    fn fetch_all(&self) -> Result<()> {
        *self.fetch_calls.lock().unwrap() += 1;
        Err(GrecentError::git_command_failed(
            "git fetch --all",
            "fatal: unable to access remote",
        ))
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        if !self.branch_names().iter().any(|name| name == branch) {
            return Err(GrecentError::git_command_failed(
                format!("git checkout {branch}"),
                format!("error: pathspec '{branch}' did not match"),
            ));
        }
        *self.current.lock().unwrap() = Some(branch.to_string());
        Ok(())
    }

    fn delete_branch(&self, branch: &str, force: bool) -> Result<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push((branch.to_string(), force));

        if self.current_branch().as_deref() == Some(branch) {
            return Err(GrecentError::git_command_failed(
                format!("git branch -d {branch}"),
                format!("error: cannot delete branch '{branch}' used by worktree"),
            ));
        }
        if !force && self.unmerged.iter().any(|name| name == branch) {
            return Err(GrecentError::git_command_failed(
                format!("git branch -d {branch}"),
                format!("error: the branch '{branch}' is not fully merged."),
            ));
        }
        self.branches.lock().unwrap().retain(|b| b.name != branch);
        Ok(())
    }

    fn merge_into_current(&self, branch: &str) -> Result<()> {
        match &self.merge_error {
            Some(message) => Err(GrecentError::git_command_failed(
                format!("git merge --no-edit {branch}"),
                message.clone(),
            )),
            None => Ok(()),
        }
    }
}
