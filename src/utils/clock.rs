//! Source of the current time. Everything that needs "now" takes a `&dyn Clock`
//! so tests can pin the time.

use chrono::{DateTime, Local, NaiveDate};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn yesterday(&self) -> NaiveDate {
        let today = self.today();
        today.pred_opt().unwrap_or(today)
    }
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn yesterday_crosses_month_boundary() {
        let clock = FixedClock(Local.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
        assert_eq!(clock.yesterday(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let delta = Local::now() - SystemClock.now();
        assert!(delta.num_seconds().abs() < 5);
    }
}
