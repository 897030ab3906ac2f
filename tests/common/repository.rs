//! Git repository management and setup utilities
//!
//! Every git invocation can be pinned to a date, which fixes both commit times
//! and the reflog entries git writes for them.

#![allow(dead_code)]

use grecent::core::error::{GrecentError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Run git in `repo_path`, optionally pretending the current time is `date`
pub fn git_at(repo_path: &Path, args: &[&str], date: Option<&str>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(repo_path);
    if let Some(date) = date {
        cmd.env("GIT_COMMITTER_DATE", date)
            .env("GIT_AUTHOR_DATE", date);
    }

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(GrecentError::git_command_failed(
            format!("git {}", args.join(" ")),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    git_at(repo_path, args, None)
}

/// Fresh repository whose unborn HEAD points at `main`
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--quiet"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Writes a file and commits it at `date`
pub fn commit_at(repo_path: &Path, filename: &str, date: &str) -> Result<()> {
    fs::write(repo_path.join(filename), format!("{filename} at {date}\n"))?;
    git(repo_path, &["add", filename])?;
    git_at(
        repo_path,
        &["commit", "--quiet", "-m", &format!("Update {filename}")],
        Some(date),
    )?;
    Ok(())
}

/// Creates `name` at `start_point` without switching to it
pub fn branch_at(repo_path: &Path, name: &str, start_point: &str, date: &str) -> Result<()> {
    git_at(repo_path, &["branch", "-f", name, start_point], Some(date))?;
    Ok(())
}

/// Gives `branch` an upstream on the fake remote `origin` whose tip is `target`
pub fn set_upstream(repo_path: &Path, branch: &str, target: &str) -> Result<()> {
    git(
        repo_path,
        &["update-ref", &format!("refs/remotes/origin/{branch}"), target],
    )?;
    git(
        repo_path,
        &["config", "remote.origin.url", "https://example.invalid/repo.git"],
    )?;
    git(
        repo_path,
        &[
            "config",
            "remote.origin.fetch",
            "+refs/heads/*:refs/remotes/origin/*",
        ],
    )?;
    git(repo_path, &["config", &format!("branch.{branch}.remote"), "origin"])?;
    git(
        repo_path,
        &[
            "config",
            &format!("branch.{branch}.merge"),
            &format!("refs/heads/{branch}"),
        ],
    )?;
    Ok(())
}

/// Scenario: `main` last committed 2024-01-01; `feature` points at a 2023
/// commit but was moved locally on 2024-06-01; `stale` untouched since its
/// creation on 2023-06-01
pub fn setup_ranked_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    commit_at(&repo.path, "first.txt", "2023-05-01 10:00:00 +0000")?;
    commit_at(&repo.path, "second.txt", "2023-06-01 10:00:00 +0000")?;
    branch_at(&repo.path, "stale", "HEAD~1", "2023-06-01 10:00:00 +0000")?;
    branch_at(&repo.path, "feature", "HEAD~1", "2023-06-01 10:00:00 +0000")?;
    commit_at(&repo.path, "main.txt", "2024-01-01 10:00:00 +0000")?;
    branch_at(&repo.path, "feature", "HEAD~1", "2024-06-01 10:00:00 +0000")?;
    Ok(repo)
}
