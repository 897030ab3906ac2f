//! Interactive session model and its transition function.
//!
//! [`SessionState`] owns the current snapshot and everything derived from it.
//! [`SessionState::apply`] is the only way to change it: it consumes one
//! [`Event`] and answers with an [`Effect`] telling the event loop whether a
//! git [`Command`] has to run. Commands never run here; their results come back
//! later as [`Event::Completed`], so the state is always written by one thread.

use crate::core::{
    render::{self, BranchRow},
    state::{BranchRecord, Snapshot},
};
use crate::session::dispatch::{Command, Completion, Outcome};
use crate::session::filter::{compute_view, BranchMatcher};
use crate::session::sort::SortOrder;
use chrono::{DateTime, Utc};

/// Destructive action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Delete,
    Merge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Typing a query; `previous` is restored if the search is aborted
    Searching { previous: String },
    Confirming {
        action: PendingAction,
        target: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    BeginSearch,
    SearchInput(char),
    SearchBackspace,
    CommitSearch,
    AbortSearch,
    ClearSearch,
    CycleSort,
    Checkout,
    RequestDelete,
    RequestMerge,
    Confirm,
    Cancel,
    Refresh,
    FetchRefresh,
    Tick,
    Quit,
    Completed(Completion),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Dispatch(Command),
    Quit,
}

#[derive(Debug)]
pub struct SessionState {
    full: Snapshot,
    view: Vec<BranchRecord>,
    cursor: usize,
    search_text: String,
    sort: SortOrder,
    mode: Mode,
    status: String,
    in_flight: Option<Command>,
    /// Checked-out branch; follows checkouts even though they do not reload
    current: Option<String>,
    limit: Option<usize>,
    matcher: BranchMatcher,
}

impl SessionState {
    pub fn new(snapshot: Snapshot, limit: Option<usize>) -> Self {
        let mut state = Self {
            full: Snapshot::default(),
            view: Vec::new(),
            cursor: 0,
            search_text: String::new(),
            sort: SortOrder::default(),
            mode: Mode::Browsing,
            status: String::new(),
            in_flight: None,
            current: None,
            limit,
            matcher: BranchMatcher::new(),
        };
        state.install(snapshot);
        state
    }

    pub fn full(&self) -> &Snapshot {
        &self.full
    }

    pub fn view(&self) -> &[BranchRecord] {
        &self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&BranchRecord> {
        self.view.get(self.cursor)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn in_flight(&self) -> Option<&Command> {
        self.in_flight.as_ref()
    }

    /// Table rows for the current view
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<BranchRow> {
        let cursor = (!self.view.is_empty()).then_some(self.cursor);
        render::rows(&self.view, cursor, now)
    }

    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::Quit => return Effect::Quit,
            Event::Tick => {}
            Event::Completed(completion) => self.complete(completion),
            Event::ClearSearch => self.clear_search(),
            event => match self.mode.clone() {
                Mode::Browsing => return self.apply_browsing(event),
                Mode::Searching { previous } => self.apply_searching(event, previous),
                Mode::Confirming { action, target } => {
                    return self.apply_confirming(event, action, target)
                }
            },
        }
        Effect::None
    }

    fn apply_browsing(&mut self, event: Event) -> Effect {
        match event {
            Event::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Event::MoveDown => {
                if self.cursor + 1 < self.view.len() {
                    self.cursor += 1;
                }
            }
            Event::MoveTop => self.cursor = 0,
            Event::MoveBottom => self.cursor = self.view.len().saturating_sub(1),
            Event::BeginSearch => {
                self.mode = Mode::Searching {
                    previous: self.search_text.clone(),
                };
                self.status =
                    "search: type to filter, Enter to apply, Esc to cancel".to_string();
            }
            Event::CycleSort => {
                self.sort = self.sort.next();
                self.recompute();
                self.status = if self.search_text.is_empty() {
                    format!("sorted by {}", self.sort.label())
                } else {
                    format!("sorted by {} (after the filter is cleared)", self.sort.label())
                };
            }
            Event::Checkout => {
                if let Some(name) = self.selected_name() {
                    return self.dispatch(Command::Checkout(name));
                }
            }
            Event::RequestDelete => self.request(PendingAction::Delete),
            Event::RequestMerge => self.request(PendingAction::Merge),
            Event::Refresh => return self.dispatch(Command::Refresh),
            Event::FetchRefresh => return self.dispatch(Command::FetchRefresh),
            _ => {}
        }
        Effect::None
    }

    fn apply_searching(&mut self, event: Event, previous: String) {
        match event {
            Event::SearchInput(c) => {
                self.search_text.push(c);
                self.cursor = 0;
                self.recompute();
            }
            Event::SearchBackspace => {
                if self.search_text.pop().is_some() {
                    self.cursor = 0;
                    self.recompute();
                }
            }
            Event::CommitSearch => {
                self.mode = Mode::Browsing;
                self.status = if self.search_text.is_empty() {
                    "filter cleared".to_string()
                } else {
                    format!("filter applied: {} match(es)", self.view.len())
                };
            }
            Event::AbortSearch => {
                self.search_text = previous;
                self.mode = Mode::Browsing;
                self.recompute();
                self.status = "search cancelled".to_string();
            }
            _ => {}
        }
    }

    fn apply_confirming(&mut self, event: Event, action: PendingAction, target: String) -> Effect {
        match event {
            Event::Confirm => {
                self.mode = Mode::Browsing;
                let is_current = self.current.as_deref() == Some(target.as_str());
                match action {
                    PendingAction::Delete if is_current => {
                        self.status = "cannot delete current branch".to_string();
                    }
                    PendingAction::Merge if is_current => {
                        self.status = "already on this branch".to_string();
                    }
                    PendingAction::Delete => return self.dispatch(Command::Delete(target)),
                    PendingAction::Merge => return self.dispatch(Command::Merge(target)),
                }
            }
            Event::Cancel => {
                self.mode = Mode::Browsing;
                self.status = "cancelled".to_string();
            }
            _ => {}
        }
        Effect::None
    }

    fn request(&mut self, action: PendingAction) {
        if let Some(busy) = &self.in_flight {
            self.status = format!("busy: {} in progress", busy.describe());
            return;
        }
        let Some(target) = self.selected_name() else {
            return;
        };
        self.status = match action {
            PendingAction::Delete => format!("delete {target}? y/N"),
            PendingAction::Merge => format!("merge {target} into current? y/N"),
        };
        self.mode = Mode::Confirming { action, target };
    }

    fn dispatch(&mut self, command: Command) -> Effect {
        if let Some(busy) = &self.in_flight {
            self.status = format!("busy: {} in progress", busy.describe());
            return Effect::None;
        }
        self.status = format!("{}…", command.describe());
        self.in_flight = Some(command.clone());
        Effect::Dispatch(command)
    }

    fn complete(&mut self, completion: Completion) {
        let Completion { command, outcome } = completion;
        if self.in_flight.as_ref() == Some(&command) {
            self.in_flight = None;
        }

        self.status = match (&command, outcome) {
            (Command::Checkout(name), Outcome::Done) => {
                self.current = Some(name.clone());
                format!("checked out {name}")
            }
            (Command::Delete(name), Outcome::Ranked(snapshot)) => {
                self.install(snapshot);
                format!("deleted {name}")
            }
            (Command::Merge(name), Outcome::Ranked(snapshot)) => {
                self.install(snapshot);
                format!("merged {name} into current")
            }
            (Command::Refresh, Outcome::Ranked(snapshot)) => {
                self.install(snapshot);
                "refreshed".to_string()
            }
            (Command::FetchRefresh, Outcome::Ranked(snapshot)) => {
                self.install(snapshot);
                "fetched".to_string()
            }
            (Command::Delete(name), Outcome::DoneButStale(reason)) => {
                format!("deleted {name} (refresh failed: {reason})")
            }
            (Command::Merge(name), Outcome::DoneButStale(reason)) => {
                format!("merged {name} into current (refresh failed: {reason})")
            }
            (command, Outcome::Failed(reason)) => {
                format!("{} failed: {reason}", command.verb())
            }
            (command, outcome) => {
                log::warn!("Unexpected outcome {outcome:?} for {command:?}");
                format!("{} finished", command.verb())
            }
        };
    }

    fn clear_search(&mut self) {
        if matches!(self.mode, Mode::Searching { .. }) {
            self.mode = Mode::Browsing;
        }
        if self.search_text.is_empty() {
            return;
        }
        self.search_text.clear();
        self.recompute();
        self.status = "filter cleared".to_string();
    }

    /// Replace the snapshot wholesale, keeping query, sort and cursor position
    fn install(&mut self, snapshot: Snapshot) {
        // Taken before truncation so a current branch past the limit still counts
        self.current = snapshot.current().map(|record| record.name.clone());
        self.full = snapshot.truncated(self.limit);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = compute_view(&self.full, &self.search_text, self.sort, &self.matcher);
        self.cursor = self.cursor.min(self.view.len().saturating_sub(1));
    }

    fn selected_name(&self) -> Option<String> {
        self.selected().map(|record| record.name.clone())
    }
}
