use crate::core::{
    config::Config,
    error::{GrecentError, Result},
    format_branch_line,
    gateway::Gateway,
    git::GitRepo,
    print_info,
    recency::rank_branches,
    state::Snapshot,
};
use crate::tui::{self, TuiOptions};
use std::env;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// How the ranking should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Plain,
    Interactive,
}

impl OutputMode {
    /// `--json` wins; otherwise `--tui`/`--no-tui` decide, and without either
    /// the interactive view is used only when stdout is a terminal.
    pub fn resolve(json: bool, tui: Option<bool>, stdout_is_terminal: bool) -> Self {
        if json {
            return OutputMode::Json;
        }
        if tui.unwrap_or(stdout_is_terminal) {
            OutputMode::Interactive
        } else {
            OutputMode::Plain
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentArgs {
    pub limit: Option<usize>,
    pub fetch: bool,
    pub mode: OutputMode,
}

pub fn execute_recent(args: RecentArgs) -> Result<()> {
    // Check if we're in a git repository
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir).map_err(|_| GrecentError::NotInGitRepo)?;

    let config = Config::load()?;
    let limit = args.limit.unwrap_or(config.default_limit);

    if args.fetch || config.fetch_on_start {
        if let Err(e) = git_repo.fetch_all() {
            log::warn!("Fetch failed, continuing with cached remote refs: {e}");
        }
    }

    let snapshot = rank_branches(&git_repo)?;
    log::debug!(
        "Ranked {} branches in {}",
        snapshot.len(),
        git_repo.get_repo_path().display()
    );

    match args.mode {
        OutputMode::Json => print_json(&snapshot.truncated(Some(limit))),
        OutputMode::Plain => {
            print_plain(&snapshot.truncated(Some(limit)));
            Ok(())
        }
        OutputMode::Interactive => tui::run(
            snapshot,
            Arc::new(git_repo),
            TuiOptions {
                limit: Some(limit),
                tick: config.tick_interval(),
            },
        ),
    }
}

fn print_json(snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot.records())?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn print_plain(snapshot: &Snapshot) {
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if snapshot.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return;
    }

    let now = chrono::Utc::now();
    for record in snapshot.iter() {
        println!("{}", format_branch_line(record, now));
    }
}
