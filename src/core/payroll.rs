//! Payroll derivation: punch events → reconstructed intervals → pay.

use crate::core::classifier::classify;
use crate::core::reconstruct::reconstruct;
use crate::models::event::PunchEvent;
use crate::models::payroll::PayrollResult;
use crate::models::rate::RateConfig;

/// Derive pay for a window of punch events.
///
/// Events may arrive in any order; they are re-sorted here. Sessions with
/// no matching CLOCK_OUT inside the window contribute nothing — pay is
/// only computed for completed sessions.
pub fn calculate(events: &[PunchEvent], rate: &RateConfig) -> PayrollResult {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.occurred_at);

    let intervals = reconstruct(&sorted);

    let mut normal_minutes = 0i64;
    let mut late_night_minutes = 0i64;
    for iv in &intervals {
        let split = classify(iv.start, iv.end);
        normal_minutes += split.normal_minutes;
        late_night_minutes += split.late_night_minutes;
    }

    let normal_hours = normal_minutes as f64 / 60.0;
    let late_night_hours = late_night_minutes as f64 / 60.0;

    // Pay is rounded once, from the unrounded hours. The 2dp hours below
    // are display values and do not feed back into the pay.
    let total_pay =
        (normal_hours * rate.hourly_rate + late_night_hours * rate.late_night_rate).round() as i64;

    PayrollResult {
        total_pay,
        total_normal_hours: round2(normal_hours),
        total_late_night_hours: round2(late_night_hours),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
