//! Ranked branch data structures.
//!
//! # Public API
//! - [`BranchRecord`]: One local branch with its fused activity time
//! - [`Snapshot`]: Immutable ranked sequence of records from one ranking run
//! - [`Timestamp`]: Time type used for every activity signal
//!
//! The JSON form of a record keeps the field names scripts already rely on
//! (`commitHash`, `commitTime`, `isCurrent`, `hasUpstream`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A point in time with the UTC offset git recorded for it
pub type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    #[serde(rename = "commitHash")]
    pub tip_commit_hash: String,
    #[serde(rename = "commitTime")]
    pub activity_time: Timestamp,
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
    #[serde(rename = "hasUpstream")]
    pub has_upstream: bool,
}

impl BranchRecord {
    /// First seven characters of the tip commit id
    pub fn short_hash(&self) -> &str {
        match self.tip_commit_hash.char_indices().nth(7) {
            Some((end, _)) => &self.tip_commit_hash[..end],
            None => &self.tip_commit_hash,
        }
    }
}

/// Ranked branch list produced by one run of the recency engine.
///
/// Cloning is cheap and never copies records; a refresh builds a new snapshot
/// instead of editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    records: Arc<[BranchRecord]>,
}

impl Snapshot {
    pub fn new(records: Vec<BranchRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// A new snapshot holding at most `limit` leading records
    pub fn truncated(&self, limit: Option<usize>) -> Self {
        match limit {
            Some(limit) if limit < self.records.len() => {
                Self::new(self.records[..limit].to_vec())
            }
            _ => self.clone(),
        }
    }

    pub fn records(&self) -> &[BranchRecord] {
        &self.records
    }

    pub fn find(&self, name: &str) -> Option<&BranchRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn current(&self) -> Option<&BranchRecord> {
        self.records.iter().find(|record| record.is_current)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Snapshot {
    type Target = [BranchRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<BranchRecord>> for Snapshot {
    fn from(records: Vec<BranchRecord>) -> Self {
        Self::new(records)
    }
}
