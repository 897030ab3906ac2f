//! View recomputation: fuzzy filter plus sort.
//!
//! With an empty query the view is the whole snapshot in the active sort
//! order. With a query it is the fuzzy matches ordered by relevance, and the
//! sort order is ignored until the query is cleared.

use crate::core::state::BranchRecord;
use crate::session::sort::SortOrder;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use std::fmt;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Case- and accent-insensitive fuzzy matcher for branch names
pub struct BranchMatcher {
    matcher: SkimMatcherV2,
}

impl BranchMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    pub fn score(&self, name: &str, query: &str) -> Option<i64> {
        self.matcher.fuzzy_match(&fold(name), &fold(query))
    }
}

impl Default for BranchMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BranchMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BranchMatcher")
    }
}

/// Drop diacritics: decompose, then discard the combining marks
pub fn fold(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

pub fn compute_view(
    full: &[BranchRecord],
    query: &str,
    sort: SortOrder,
    matcher: &BranchMatcher,
) -> Vec<BranchRecord> {
    if query.is_empty() {
        let mut view = full.to_vec();
        // Stable, so equal keys keep snapshot order
        view.sort_by(|a, b| sort.compare(a, b));
        return view;
    }

    let mut scored: Vec<(i64, &BranchRecord)> = full
        .iter()
        .filter_map(|record| matcher.score(&record.name, query).map(|score| (score, record)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, record)| record.clone()).collect()
}
