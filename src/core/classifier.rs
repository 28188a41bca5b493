//! Late-night / normal minute classification.
//!
//! A minute is late-night when its wall-clock hour satisfies
//! `hour >= 22 || hour < 4`. Classification works on naive local
//! timestamps; the hour-of-day test has no timezone parameter of its own.
//!
//! Instead of walking minute by minute, the interval is intersected with
//! each spanned day's two late-night bands ([00:00, 04:00) and
//! [22:00, 24:00)). For whole-minute inputs the result is identical to the
//! per-minute walk.

use chrono::{Duration, NaiveDateTime};

/// Hour at which the late-night band opens.
pub const LATE_NIGHT_START_HOUR: u32 = 22;
/// Hour at which the late-night band closes.
pub const LATE_NIGHT_END_HOUR: u32 = 4;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSplit {
    pub normal_minutes: i64,
    pub late_night_minutes: i64,
}

/// Partition the half-open interval `[start, end)` into normal and
/// late-night minutes. `start == end` (or a reversed interval) yields zero
/// for both.
pub fn classify(start: NaiveDateTime, end: NaiveDateTime) -> MinuteSplit {
    if end <= start {
        return MinuteSplit::default();
    }

    let total = (end - start).num_minutes();
    let mut late = 0i64;

    let mut day = start.date();
    let last = end.date();
    while day <= last {
        let midnight = day.and_hms_opt(0, 0, 0).unwrap();

        // [00:00, 04:00) of this day
        late += overlap_minutes(
            start,
            end,
            midnight,
            day.and_hms_opt(LATE_NIGHT_END_HOUR, 0, 0).unwrap(),
        );

        // [22:00, 24:00) of this day
        late += overlap_minutes(
            start,
            end,
            day.and_hms_opt(LATE_NIGHT_START_HOUR, 0, 0).unwrap(),
            midnight + Duration::days(1),
        );

        day = day.succ_opt().unwrap();
    }

    MinuteSplit {
        normal_minutes: total - late,
        late_night_minutes: late,
    }
}

/// Whole minutes of `[start, end)` that fall inside `[band_start, band_end)`.
fn overlap_minutes(
    start: NaiveDateTime,
    end: NaiveDateTime,
    band_start: NaiveDateTime,
    band_end: NaiveDateTime,
) -> i64 {
    let lo = start.max(band_start);
    let hi = end.min(band_end);
    if hi > lo { (hi - lo).num_minutes() } else { 0 }
}
