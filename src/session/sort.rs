//! Sort orders for the interactive view.
//!
//! The `s` key walks a fixed four-step cycle:
//! time ↓ → name ↑ → time ↑ → name ↓ → time ↓.

use crate::core::state::BranchRecord;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Time,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub descending: bool,
}

const SORT_CYCLE: [SortOrder; 4] = [
    SortOrder::new(SortKey::Time, true),
    SortOrder::new(SortKey::Name, false),
    SortOrder::new(SortKey::Time, false),
    SortOrder::new(SortKey::Name, true),
];

impl SortOrder {
    pub const fn new(key: SortKey, descending: bool) -> Self {
        Self { key, descending }
    }

    /// The order that follows `self` in the cycle
    pub fn next(self) -> Self {
        let position = SORT_CYCLE
            .iter()
            .position(|order| *order == self)
            .unwrap_or(0);
        SORT_CYCLE[(position + 1) % SORT_CYCLE.len()]
    }

    pub fn compare(&self, a: &BranchRecord, b: &BranchRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::Time => a.activity_time.cmp(&b.activity_time),
            SortKey::Name => a.name.cmp(&b.name),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.key, self.descending) {
            (SortKey::Time, true) => "time ↓",
            (SortKey::Time, false) => "time ↑",
            (SortKey::Name, true) => "name ↓",
            (SortKey::Name, false) => "name ↑",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SORT_CYCLE[0]
    }
}
