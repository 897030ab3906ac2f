//! Key bindings.
//!
//! Browsing: `j`/`k` or arrows move, `g`/`G` or Home/End jump, `/` searches,
//! Esc clears the filter, `s` cycles the sort, Enter checks out, `x`/Delete
//! deletes, `m` merges into the current branch, `r` refreshes, `f` fetches and
//! refreshes, `q` quits. Ctrl+C quits from anywhere.

use crate::session::{Event, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const HELP: &str = "j/k,↑/↓ move • / search (fuzzy) • s sort • r refresh • f fetch • enter checkout • x delete • m merge • q quit";

pub fn resolve(key: KeyEvent, mode: &Mode) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('u') if matches!(mode, Mode::Searching { .. }) => {
                Some(Event::ClearSearch)
            }
            _ => None,
        };
    }

    match mode {
        // Anything but an explicit yes counts as no
        Mode::Confirming { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Event::Confirm),
            _ => Some(Event::Cancel),
        },
        Mode::Searching { .. } => match key.code {
            KeyCode::Enter => Some(Event::CommitSearch),
            KeyCode::Esc => Some(Event::AbortSearch),
            KeyCode::Backspace => Some(Event::SearchBackspace),
            KeyCode::Char(c) => Some(Event::SearchInput(c)),
            _ => None,
        },
        Mode::Browsing => match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Event::MoveTop),
            KeyCode::End | KeyCode::Char('G') => Some(Event::MoveBottom),
            KeyCode::Char('/') => Some(Event::BeginSearch),
            KeyCode::Esc => Some(Event::ClearSearch),
            KeyCode::Enter => Some(Event::Checkout),
            KeyCode::Char('x') | KeyCode::Delete => Some(Event::RequestDelete),
            KeyCode::Char('m') => Some(Event::RequestMerge),
            KeyCode::Char('r') => Some(Event::Refresh),
            KeyCode::Char('f') => Some(Event::FetchRefresh),
            KeyCode::Char('s') => Some(Event::CycleSort),
            _ => None,
        },
    }
}
