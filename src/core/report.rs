//! Builds the "time spent" report: entries sorted by completion time,
//! each annotated with the time elapsed since the previous one.

use crate::models::Entry;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, round_to_minute};
use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use tracing::debug;

/// Anything longer than this is a gap between work sessions, not work.
const MAX_TRACKED_MINUTES: i64 = 8 * 60;

const DESCRIPTION_WRAP: usize = 30;

pub const TIME_FORMAT: &str = "%b-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub finished: DateTime<FixedOffset>,
    /// `None` for the very first entry and for gaps.
    pub duration: Option<TimeDelta>,
    pub description: String,
}

impl ReportRow {
    pub fn duration_str(&self) -> String {
        match self.duration {
            Some(d) => format_duration(d),
            None => "-".to_string(),
        }
    }
}

/// Time spent on `current`, or `None` when the gap is too long to be work.
pub fn time_spent(previous: &Entry, current: &Entry) -> Option<TimeDelta> {
    let d = round_to_minute(current.finished - previous.finished);
    (d <= TimeDelta::minutes(MAX_TRACKED_MINUTES)).then_some(d)
}

/// Sort, annotate and keep only entries finished strictly after `cutoff`.
///
/// Durations are measured against the previous entry in the full history,
/// so the first row shown may still carry a duration.
pub fn build_report(entries: &[Entry], cutoff: DateTime<Local>) -> Vec<ReportRow> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.finished);

    let cutoff = cutoff.fixed_offset();
    let rows: Vec<ReportRow> = sorted
        .iter()
        .enumerate()
        .filter(|(_, e)| e.finished > cutoff)
        .map(|(i, e)| ReportRow {
            finished: e.finished,
            duration: i.checked_sub(1).and_then(|p| time_spent(&sorted[p], e)),
            description: e.description.clone(),
        })
        .collect();

    debug!(total = sorted.len(), shown = rows.len(), %cutoff, "report built");
    rows
}

fn format_finished(t: DateTime<FixedOffset>) -> String {
    t.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

pub fn report_title(cutoff: DateTime<Local>) -> String {
    format!("Showing results since {}", cutoff.format("%Y-%b-%d %H:%M"))
}

pub fn render_table(rows: &[ReportRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("Time"),
        Column::new("Duration"),
        Column::wrapped("Description", DESCRIPTION_WRAP),
    ]);

    for row in rows {
        table.add_row(vec![
            format_finished(row.finished),
            row.duration_str(),
            row.description.clone(),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, day, h, m, 0).unwrap()
    }

    fn entry(day: u32, h: u32, m: u32, desc: &str) -> Entry {
        Entry::new(at(day, h, m), desc)
    }

    #[test]
    fn half_hour_between_entries() {
        let entries = vec![entry(6, 9, 0, "a"), entry(6, 9, 30, "b")];
        let rows = build_report(&entries, at(1, 0, 0));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].duration_str(), "-");
        assert_eq!(rows[1].duration_str(), "30m0s");
    }

    #[test]
    fn gap_over_eight_hours_is_dash() {
        let entries = vec![entry(6, 17, 0, "eod"), entry(7, 9, 0, "morning")];
        let rows = build_report(&entries, at(1, 0, 0));
        assert_eq!(rows[1].duration, None);
        assert_eq!(rows[1].duration_str(), "-");
    }

    #[test]
    fn exactly_eight_hours_still_counts() {
        let entries = vec![entry(6, 9, 0, "start"), entry(6, 17, 0, "end")];
        let rows = build_report(&entries, at(1, 0, 0));
        assert_eq!(rows[1].duration_str(), "8h0m0s");
    }

    #[test]
    fn sorts_unordered_input() {
        let entries = vec![
            entry(6, 10, 15, "third"),
            entry(6, 9, 0, "first"),
            entry(6, 9, 45, "second"),
        ];
        let rows = build_report(&entries, at(1, 0, 0));
        let descs: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descs, ["first", "second", "third"]);
        assert_eq!(rows[1].duration_str(), "45m0s");
        assert_eq!(rows[2].duration_str(), "30m0s");
    }

    #[test]
    fn cutoff_is_exclusive_but_durations_use_full_history() {
        let entries = vec![
            entry(5, 23, 50, "before"),
            entry(6, 0, 0, "at cutoff"),
            entry(6, 0, 20, "after"),
        ];
        let rows = build_report(&entries, at(6, 0, 0));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "after");
        assert_eq!(rows[0].duration_str(), "20m0s");
    }

    #[test]
    fn rounds_to_the_minute() {
        let a = entry(6, 9, 0, "a");
        let mut b = entry(6, 9, 10, "b");
        b.finished += TimeDelta::seconds(31);
        assert_eq!(time_spent(&a, &b), Some(TimeDelta::minutes(11)));
    }

    #[test]
    fn table_has_expected_columns() {
        let entries = vec![entry(6, 9, 0, "a"), entry(6, 9, 30, "write report")];
        let out = render_table(&build_report(&entries, at(1, 0, 0)));

        assert!(out.contains("TIME"));
        assert!(out.contains("DURATION"));
        assert!(out.contains("DESCRIPTION"));
        assert!(out.contains("May-06 09:30"));
        assert!(out.contains("30m0s"));
        assert!(out.contains("write report"));
    }

    #[test]
    fn title_shows_cutoff() {
        assert_eq!(
            report_title(at(5, 0, 0)),
            "Showing results since 2024-May-05 00:00"
        );
    }
}
