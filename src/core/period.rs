//! Payroll period boundaries.
//!
//! A payroll month does not close at midnight: overnight sessions that
//! start before midnight on the last day of the month still belong to the
//! closing month, so the window extends to 04:00 on the first day of the
//! next month. Fixed policy, not configurable.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Hour of day at which a payroll month closes.
pub const PERIOD_CLOSE_HOUR: u32 = 4;

/// 04:00 on the first day of the month following `now`'s month.
pub fn end_of_payroll_period(now: NaiveDateTime) -> NaiveDateTime {
    first_day_of_next_month(now.date())
        .and_hms_opt(PERIOD_CLOSE_HOUR, 0, 0)
        .unwrap()
}

/// Midnight on the first day of `now`'s month.
pub fn start_of_month(now: NaiveDateTime) -> NaiveDateTime {
    now.date()
        .with_day(1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// True when `earlier` falls in a strictly earlier calendar month/year
/// than `now`. Drives the lazy monthly goal reset.
pub fn in_earlier_month(earlier: NaiveDateTime, now: NaiveDateTime) -> bool {
    (earlier.year(), earlier.month()) < (now.year(), now.month())
}

fn first_day_of_next_month(d: NaiveDate) -> NaiveDate {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1).unwrap()
    }
}
