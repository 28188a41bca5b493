//! Library-level tests for the payroll derivation engine:
//! minute classification, punch reconstruction, pay calculation and
//! period boundaries.

use chrono::{NaiveDate, NaiveDateTime};
use punchclock::core::classifier::{MinuteSplit, classify};
use punchclock::core::payroll::calculate;
use punchclock::core::period::{end_of_payroll_period, in_earlier_month, start_of_month};
use punchclock::core::reconstruct::reconstruct;
use punchclock::models::event::PunchEvent;
use punchclock::models::punch_action::PunchAction;
use punchclock::models::rate::RateConfig;

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn ev(action: PunchAction, at: NaiveDateTime) -> PunchEvent {
    PunchEvent::new(0, 1, action, at)
}

fn rates() -> RateConfig {
    RateConfig::new(1000.0, 1250.0).unwrap()
}

// ---------------------------------------------------------------
// classifier
// ---------------------------------------------------------------

#[test]
fn classify_empty_interval_is_zero() {
    let t = dt(2026, 3, 2, 9, 0);
    assert_eq!(classify(t, t), MinuteSplit::default());
}

#[test]
fn classify_day_work_is_all_normal() {
    let split = classify(dt(2026, 3, 2, 9, 0), dt(2026, 3, 2, 17, 0));
    assert_eq!(split.normal_minutes, 480);
    assert_eq!(split.late_night_minutes, 0);
}

#[test]
fn classify_late_night_start_boundary() {
    // one minute on each side of 22:00
    let split = classify(dt(2026, 3, 2, 21, 59), dt(2026, 3, 2, 22, 1));
    assert_eq!(split.normal_minutes, 1);
    assert_eq!(split.late_night_minutes, 1);
}

#[test]
fn classify_late_night_end_boundary() {
    // one minute on each side of 04:00
    let split = classify(dt(2026, 3, 3, 3, 59), dt(2026, 3, 3, 4, 1));
    assert_eq!(split.late_night_minutes, 1);
    assert_eq!(split.normal_minutes, 1);
}

#[test]
fn classify_overnight_session() {
    // 21:00 → 05:00: 1h normal + 6h late-night + 1h normal
    let split = classify(dt(2026, 3, 2, 21, 0), dt(2026, 3, 3, 5, 0));
    assert_eq!(split.late_night_minutes, 360);
    assert_eq!(split.normal_minutes, 120);
}

#[test]
fn classify_partition_property() {
    let cases = [
        (dt(2026, 3, 2, 9, 0), dt(2026, 3, 2, 9, 1)),
        (dt(2026, 3, 2, 23, 30), dt(2026, 3, 3, 0, 30)),
        (dt(2026, 3, 2, 21, 0), dt(2026, 3, 4, 6, 15)),
        (dt(2026, 12, 31, 22, 0), dt(2027, 1, 1, 4, 0)),
    ];

    for (start, end) in cases {
        let split = classify(start, end);
        assert_eq!(
            split.normal_minutes + split.late_night_minutes,
            (end - start).num_minutes(),
            "partition failed for {start} → {end}"
        );
    }
}

#[test]
fn classify_multi_day_interval() {
    // 48h spanning two full late-night windows of 6h each
    let split = classify(dt(2026, 3, 2, 12, 0), dt(2026, 3, 4, 12, 0));
    assert_eq!(split.late_night_minutes, 2 * 360);
    assert_eq!(split.normal_minutes, 48 * 60 - 2 * 360);
}

// ---------------------------------------------------------------
// reconstructor
// ---------------------------------------------------------------

#[test]
fn reconstruct_round_trip_with_break() {
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 12, 0)),
        ev(PunchAction::BreakEnd, dt(2026, 3, 2, 13, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 18, 0)),
    ];

    let intervals = reconstruct(&events);
    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].start, dt(2026, 3, 2, 9, 0));
    assert_eq!(intervals[0].end, dt(2026, 3, 2, 12, 0));
    assert_eq!(intervals[1].start, dt(2026, 3, 2, 13, 0));
    assert_eq!(intervals[1].end, dt(2026, 3, 2, 18, 0));
}

#[test]
fn reconstruct_unterminated_session_emits_nothing() {
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 12, 0)),
    ];

    assert!(reconstruct(&events).is_empty());
}

#[test]
fn reconstruct_clock_in_discards_open_session() {
    // the 09:00 session is silently replaced by the 10:00 one
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 10, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 11, 0)),
    ];

    let intervals = reconstruct(&events);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, dt(2026, 3, 2, 10, 0));
    assert_eq!(intervals[0].end, dt(2026, 3, 2, 11, 0));
}

#[test]
fn reconstruct_ignores_out_of_protocol_events() {
    // stray BREAK_END and CLOCK_OUT, then a clean session
    let events = vec![
        ev(PunchAction::BreakEnd, dt(2026, 3, 2, 8, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 8, 30)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 8, 45)),
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 10, 0)),
    ];

    let intervals = reconstruct(&events);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, dt(2026, 3, 2, 9, 0));
    assert_eq!(intervals[0].end, dt(2026, 3, 2, 10, 0));
}

#[test]
fn reconstruct_clock_out_while_on_break_is_ignored() {
    // on break, the session has no active span to close
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 10, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 11, 0)),
    ];

    assert!(reconstruct(&events).is_empty());
}

#[test]
fn reconstruct_two_sessions_emit_in_close_order() {
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 12, 0)),
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 14, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 17, 0)),
    ];

    let intervals = reconstruct(&events);
    assert_eq!(intervals.len(), 2);
    assert!(intervals[0].end <= intervals[1].start);
}

// ---------------------------------------------------------------
// payroll calculator
// ---------------------------------------------------------------

#[test]
fn payroll_example_full_day() {
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 12, 0)),
        ev(PunchAction::BreakEnd, dt(2026, 3, 2, 13, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 18, 0)),
    ];

    let result = calculate(&events, &rates());
    assert_eq!(result.total_pay, 8000);
    assert_eq!(result.total_normal_hours, 8.00);
    assert_eq!(result.total_late_night_hours, 0.00);
}

#[test]
fn payroll_sorts_events_defensively() {
    let events = vec![
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 18, 0)),
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::BreakEnd, dt(2026, 3, 2, 13, 0)),
        ev(PunchAction::BreakStart, dt(2026, 3, 2, 12, 0)),
    ];

    assert_eq!(calculate(&events, &rates()).total_pay, 8000);
}

#[test]
fn payroll_overnight_late_night_premium() {
    // 21:00 → 01:00: 1h normal + 3h late-night
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 21, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 3, 1, 0)),
    ];

    let result = calculate(&events, &rates());
    assert_eq!(result.total_pay, 1000 + 3 * 1250);
    assert_eq!(result.total_normal_hours, 1.00);
    assert_eq!(result.total_late_night_hours, 3.00);
}

#[test]
fn payroll_unterminated_session_pays_nothing() {
    let events = vec![ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0))];

    let result = calculate(&events, &rates());
    assert_eq!(result.total_pay, 0);
    assert_eq!(result.total_normal_hours, 0.00);
}

#[test]
fn payroll_rounds_pay_half_up() {
    // 90 minutes at 999/h = 1498.5 → 1499
    let rate = RateConfig::new(999.0, 1250.0).unwrap();
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 10, 30)),
    ];

    assert_eq!(calculate(&events, &rate).total_pay, 1499);
}

#[test]
fn payroll_hours_rounded_to_two_decimals() {
    // 100 minutes = 1.666… → 1.67, while pay uses the unrounded hours
    let events = vec![
        ev(PunchAction::ClockIn, dt(2026, 3, 2, 9, 0)),
        ev(PunchAction::ClockOut, dt(2026, 3, 2, 10, 40)),
    ];

    let result = calculate(&events, &rates());
    assert_eq!(result.total_normal_hours, 1.67);
    assert_eq!(result.total_pay, 1667); // round(100/60 * 1000)
}

#[test]
fn rate_config_rejects_non_positive_values() {
    assert!(RateConfig::new(0.0, 1250.0).is_err());
    assert!(RateConfig::new(1000.0, -1.0).is_err());
    assert!(RateConfig::new(1000.0, 1250.0).is_ok());
}

// ---------------------------------------------------------------
// period boundaries
// ---------------------------------------------------------------

#[test]
fn period_ends_at_four_am_next_month() {
    assert_eq!(
        end_of_payroll_period(dt(2026, 8, 7, 15, 30)),
        dt(2026, 9, 1, 4, 0)
    );
}

#[test]
fn period_end_rolls_over_december() {
    assert_eq!(
        end_of_payroll_period(dt(2026, 12, 31, 23, 59)),
        dt(2027, 1, 1, 4, 0)
    );
}

#[test]
fn month_start_is_first_day_midnight() {
    assert_eq!(start_of_month(dt(2026, 8, 7, 15, 30)), dt(2026, 8, 1, 0, 0));
}

#[test]
fn earlier_month_detection() {
    assert!(in_earlier_month(dt(2026, 7, 31, 23, 59), dt(2026, 8, 1, 0, 0)));
    assert!(in_earlier_month(dt(2025, 12, 15, 9, 0), dt(2026, 1, 2, 9, 0)));
    assert!(!in_earlier_month(dt(2026, 8, 1, 0, 0), dt(2026, 8, 31, 23, 59)));
}
