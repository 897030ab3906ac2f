//! Color scheme for the plain branch listing.
//!
//! Padding is applied before coloring so escape codes never count towards a
//! column width.
//!
//! # Color Scheme
//! - **Current branch**: green bold with a `*` marker
//! - **Other branches**: blue
//! - **Hash and age**: muted (bright black)

use crate::core::render::humanize_since;
use crate::core::state::BranchRecord;
use chrono::{DateTime, Utc};
use colored::*;

pub const NAME_WIDTH: usize = 30;

/// `*` for the checked-out branch, blank otherwise
pub fn get_branch_marker(is_current: bool) -> ColoredString {
    if is_current {
        "*".green().bold()
    } else {
        " ".normal()
    }
}

pub fn get_colored_name(record: &BranchRecord) -> ColoredString {
    let padded = format!("{:<width$}", record.name, width = NAME_WIDTH);
    if record.is_current {
        padded.green().bold()
    } else {
        padded.blue()
    }
}

/// One listing line: `"{*| } {name:<30}  {hash7}  {age}"`
pub fn format_branch_line(record: &BranchRecord, now: DateTime<Utc>) -> String {
    format!(
        "{} {}  {}  {}",
        get_branch_marker(record.is_current),
        get_colored_name(record),
        record.short_hash().bright_black(),
        humanize_since(&record.activity_time, now).bright_black()
    )
}
