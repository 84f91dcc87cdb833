//! Time utilities: minute rounding, `1h5m0s` style formatting and
//! parsing of the `--since` date.

use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone};

pub const SINCE_DATE_FORMAT: &str = "%b-%d";

const NANOS_PER_MINUTE: i128 = 60_000_000_000;

fn total_nanos(d: TimeDelta) -> i128 {
    let secs = d.num_seconds();
    let sub = (d - TimeDelta::seconds(secs)).num_nanoseconds().unwrap_or(0);
    secs as i128 * 1_000_000_000 + sub as i128
}

/// Round to the nearest whole minute, halves away from zero.
pub fn round_to_minute(d: TimeDelta) -> TimeDelta {
    let n = total_nanos(d);
    let mut q = n / NANOS_PER_MINUTE;
    let r = n % NANOS_PER_MINUTE;
    if r.abs() * 2 >= NANOS_PER_MINUTE {
        q += n.signum();
    }
    TimeDelta::seconds((q * 60) as i64)
}

/// Format as `2h5m0s`, `30m0s`, `42s` or `0s`. Sub-second parts are dropped.
pub fn format_duration(d: TimeDelta) -> String {
    let secs = d.num_seconds();
    if secs == 0 {
        return "0s".to_string();
    }

    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.unsigned_abs();
    let (h, m, s) = (s / 3600, (s % 3600) / 60, s % 60);

    if h > 0 {
        format!("{sign}{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{sign}{m}m{s}s")
    } else {
        format!("{sign}{s}s")
    }
}

/// Any leap year; validates `Feb-29` independently of the current year.
const LEAP_YEAR: i32 = 2000;

/// Parse `Jan-02` (current year assumed) or `2024-01-02`.
/// `Feb-29` in a non-leap year rolls over to `Mar-01`.
pub fn parse_since_date(input: &str, clock: &dyn Clock) -> AppResult<NaiveDate> {
    let s = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }

    let invalid = || AppError::InvalidDate(input.to_string());
    let month_day = NaiveDate::parse_from_str(
        &format!("{LEAP_YEAR}-{s}"),
        &format!("%Y-{SINCE_DATE_FORMAT}"),
    )
    .map_err(|_| invalid())?;

    let year = clock.today().year();
    NaiveDate::from_ymd_opt(year, month_day.month(), month_day.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .ok_or_else(invalid)
}

/// Local midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> AppResult<DateTime<Local>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))
}

/// Cutoff instant for the report. Defaults to the start of yesterday.
pub fn resolve_cutoff(since: Option<&str>, clock: &dyn Clock) -> AppResult<DateTime<Local>> {
    let date = match since {
        Some(s) => parse_since_date(s, clock)?,
        None => clock.yesterday(),
    };
    start_of_day(date)
}
