//! Interactive session: state, transitions and command execution.
//!
//! The session is independent of the terminal. The `tui` module feeds it
//! events and draws what it exposes; tests drive it directly.

pub mod dispatch;
pub mod filter;
pub mod sort;
pub mod state;

pub use dispatch::{delete_with_fallback, execute, Command, Completion, Outcome};
pub use filter::{compute_view, BranchMatcher};
pub use sort::{SortKey, SortOrder};
pub use state::{Effect, Event, Mode, PendingAction, SessionState};
