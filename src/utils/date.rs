use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into a half-open `[from, to)` datetime
/// window.
///
/// Accepted forms:
/// - `YYYY-MM-DD` — one day
/// - `YYYY-MM`    — one month
/// - `YYYY`       — one year
/// - `A:B`        — range between two of the above (inclusive of B's span)
pub fn period_bounds(p: &str) -> Result<(NaiveDateTime, NaiveDateTime), String> {
    if let Some((a, b)) = p.split_once(':') {
        let (from, _) = single_period_bounds(a)?;
        let (_, to) = single_period_bounds(b)?;
        if to <= from {
            return Err(format!("Invalid period range: {}", p));
        }
        return Ok((from, to));
    }

    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDateTime, NaiveDateTime), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((day_start(d), day_start(next_day(d))));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((day_start(first), day_start(first_day_of_next_month(first))));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1)
    {
        let next = NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap();
        return Ok((day_start(first), day_start(next)));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn first_day_of_next_month(d: NaiveDate) -> NaiveDate {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1).unwrap()
    }
}

fn next_day(d: NaiveDate) -> NaiveDate {
    d.succ_opt().unwrap()
}

fn day_start(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(0, 0, 0).unwrap()
}
