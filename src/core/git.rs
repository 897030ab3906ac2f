//! Git repository access for ranking and branch actions.
//!
//! This module provides [`GitRepo`], the production [`Gateway`]. Read-only
//! queries (branches, tips, reflogs, remote-tracking refs) go through `git2`;
//! commands that change the repository (checkout, delete, merge, fetch) run the
//! `git` CLI so hooks, config and git's own safety checks apply, and their
//! stderr is returned verbatim on failure.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle implementing [`Gateway`]
//! - [`git_time_to_timestamp`]: Conversion from `git2::Time`

use crate::core::{
    error::{GrecentError, Result},
    gateway::{Gateway, LocalBranch},
    state::Timestamp,
};
use chrono::{DateTime, FixedOffset};
use git2::{BranchType, Repository};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle on a discovered repository.
///
/// Only paths are stored, so the handle is `Send + Sync` and can be shared with
/// worker threads; each call opens the repository afresh.
#[derive(Debug, Clone)]
pub struct GitRepo {
    git_dir: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo {
            git_dir: repo.path().to_path_buf(),
            workdir: repo.workdir().map(Path::to_path_buf),
        })
    }

    pub fn get_repo_path(&self) -> &Path {
        &self.git_dir
    }

    fn repository(&self) -> Result<Repository> {
        Ok(Repository::open(&self.git_dir)?)
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, mut cmd: Command) -> Result<()> {
        let workdir = self.workdir.as_ref().ok_or(GrecentError::NoWorkdir)?;
        cmd.current_dir(workdir);

        let description = describe(&cmd);
        log::debug!("Running {description}");

        let output = cmd.output()?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        log::debug!("{description} failed: {message}");

        let message = if message.is_empty() {
            format!("{description} exited with {}", output.status)
        } else {
            message
        };
        Err(GrecentError::git_command_failed(description, message))
    }
}

fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Convert a git timestamp, keeping the offset it was recorded with
pub fn git_time_to_timestamp(time: git2::Time) -> Option<Timestamp> {
    let offset = FixedOffset::east_opt(time.offset_minutes().checked_mul(60)?)?;
    DateTime::from_timestamp(time.seconds(), 0).map(|utc| utc.with_timezone(&offset))
}

impl Gateway for GitRepo {
    fn list_local_branches(&self) -> Result<Vec<LocalBranch>> {
        let repo = self.repository()?;
        let mut branches = Vec::new();

        for entry in repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            let name = branch
                .name()?
                .ok_or(GrecentError::InvalidUtf8BranchName)?
                .to_string();
            let commit = branch.get().peel_to_commit()?;
            let tip_time = git_time_to_timestamp(commit.committer().when());

            // Read from config, so an upstream that was never fetched still counts
            let upstream = repo
                .branch_upstream_name(&format!("refs/heads/{name}"))
                .ok()
                .and_then(|buf| buf.as_str().map(str::to_string));

            branches.push(LocalBranch {
                name,
                tip_hash: commit.id().to_string(),
                tip_time,
                upstream,
            });
        }

        branches.sort_by(|a, b| {
            b.tip_time
                .cmp(&a.tip_time)
                .then_with(|| a.name.cmp(&b.name))
        });
        log::debug!("Found {} local branches", branches.len());
        Ok(branches)
    }

    fn current_branch(&self) -> Option<String> {
        let repo = self.repository().ok()?;
        let head = repo.head().ok()?;
        if !head.is_branch() {
            log::debug!("HEAD is detached");
            return None;
        }
        head.shorthand().map(str::to_string)
    }

    fn latest_local_action_time(&self, branch: &str) -> Option<Timestamp> {
        let repo = self.repository().ok()?;
        let reflog = repo.reflog(&format!("refs/heads/{branch}")).ok()?;
        // Entry 0 is the newest
        let entry = reflog.get(0)?;
        let when = entry.committer().when();
        git_time_to_timestamp(when)
    }

    fn remote_ref_times(&self) -> HashMap<String, Timestamp> {
        let mut times = HashMap::new();
        let repo = match self.repository() {
            Ok(repo) => repo,
            Err(e) => {
                log::warn!("Cannot open repository for remote refs: {e}");
                return times;
            }
        };
        let branches = match repo.branches(Some(BranchType::Remote)) {
            Ok(branches) => branches,
            Err(e) => {
                log::warn!("Cannot list remote-tracking refs: {e}");
                return times;
            }
        };

        for (branch, _) in branches.flatten() {
            let Ok(Some(name)) = branch.name() else {
                continue;
            };
            let Ok(commit) = branch.get().peel_to_commit() else {
                continue;
            };
            let when = commit.committer().when();
            if let Some(time) = git_time_to_timestamp(when) {
                times.insert(name.to_string(), time);
            }
        }
        times
    }

    fn fetch_all(&self) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["fetch", "--all", "--prune", "--tags", "--quiet"])
            .env("GIT_TERMINAL_PROMPT", "0");
        self.execute_git_command(cmd)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["checkout", branch]);
        self.execute_git_command(cmd)
    }

    fn delete_branch(&self, branch: &str, force: bool) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["branch", if force { "-D" } else { "-d" }, branch]);
        self.execute_git_command(cmd)
    }

    fn merge_into_current(&self, branch: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["merge", "--no-edit", branch]);
        self.execute_git_command(cmd)
    }
}
