//! Display projection shared by every output mode.
//!
//! Turns ranked records into display rows and humanized ages. Both the
//! interactive table and the plain-text listing go through these functions, so
//! "2h ago" means the same thing everywhere. Nothing here touches the terminal.

use crate::core::state::{BranchRecord, Timestamp};
use chrono::{DateTime, TimeDelta, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One table line, ready to be styled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRow {
    pub selected: bool,
    pub is_current: bool,
    pub name: String,
    pub short_hash: String,
    pub age: String,
    pub date: String,
    pub has_upstream: bool,
}

/// Relative age on a closed-open scale: minutes, hours, days, 30-day months,
/// 365-day years. Every step truncates.
pub fn humanize_age(age: TimeDelta) -> String {
    if age < TimeDelta::minutes(1) {
        return "just now".to_string();
    }
    if age < TimeDelta::hours(1) {
        return format!("{}m ago", age.num_minutes());
    }
    if age < TimeDelta::days(1) {
        return format!("{}h ago", age.num_hours());
    }
    let days = age.num_days();
    if days < 30 {
        return format!("{days}d ago");
    }
    if days < 365 {
        return format!("{}mo ago", (days / 30).max(1));
    }
    format!("{}y ago", (days / 365).max(1))
}

pub fn humanize_since(time: &Timestamp, now: DateTime<Utc>) -> String {
    humanize_age(now.signed_duration_since(time.with_timezone(&Utc)))
}

impl BranchRow {
    pub fn from_record(record: &BranchRecord, selected: bool, now: DateTime<Utc>) -> Self {
        Self {
            selected,
            is_current: record.is_current,
            name: record.name.clone(),
            short_hash: record.short_hash().to_string(),
            age: humanize_since(&record.activity_time, now),
            date: record.activity_time.format(DATE_FORMAT).to_string(),
            has_upstream: record.has_upstream,
        }
    }
}

/// Rows for `records`, marking `cursor` as selected
pub fn rows(records: &[BranchRecord], cursor: Option<usize>, now: DateTime<Utc>) -> Vec<BranchRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| BranchRow::from_record(record, cursor == Some(index), now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_humanize_minutes_and_hours() {
        assert_eq!(humanize_age(TimeDelta::seconds(45)), "just now");
        assert_eq!(humanize_age(TimeDelta::seconds(60)), "1m ago");
        assert_eq!(humanize_age(TimeDelta::minutes(59)), "59m ago");
        assert_eq!(humanize_age(TimeDelta::minutes(90)), "1h ago");
        assert_eq!(humanize_age(TimeDelta::hours(23)), "23h ago");
    }

    #[test]
    fn test_humanize_days_months_years() {
        assert_eq!(humanize_age(TimeDelta::hours(24)), "1d ago");
        assert_eq!(humanize_age(TimeDelta::days(29)), "29d ago");
        assert_eq!(humanize_age(TimeDelta::days(30)), "1mo ago");
        assert_eq!(humanize_age(TimeDelta::days(59)), "1mo ago");
        assert_eq!(humanize_age(TimeDelta::days(60)), "2mo ago");
        assert_eq!(humanize_age(TimeDelta::days(364)), "12mo ago");
        assert_eq!(humanize_age(TimeDelta::days(365)), "1y ago");
        assert_eq!(humanize_age(TimeDelta::days(800)), "2y ago");
    }

    #[test]
    fn test_future_times_are_just_now() {
        assert_eq!(humanize_age(TimeDelta::minutes(-5)), "just now");
    }

    #[test]
    fn test_rows_project_record_fields() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = BranchRecord {
            name: "feature".to_string(),
            tip_commit_hash: "0123456789abcdef".to_string(),
            activity_time: DateTime::parse_from_rfc3339("2024-06-01T11:30:00+02:00").unwrap(),
            is_current: true,
            has_upstream: true,
        };

        let rows = rows(&[record.clone(), record], Some(1), now);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(rows[0].short_hash, "0123456");
        assert_eq!(rows[0].age, "2h ago");
        assert_eq!(rows[0].date, "2024-06-01 11:30");
        assert!(rows[0].is_current);
        assert!(rows[0].has_upstream);
    }
}
