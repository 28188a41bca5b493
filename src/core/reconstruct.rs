//! Punch-stream reconstruction.
//!
//! Rebuilds the active (non-break) work intervals of each completed
//! clock-in/clock-out session from the raw punch log. Out-of-protocol
//! events (a BREAK_END with no open break, a CLOCK_OUT with no session)
//! are ignored rather than rejected: the output is the best reading of the
//! well-formed subsequence. The caller supplies events pre-sorted by
//! occurrence and pre-filtered to one employee.

use crate::models::event::PunchEvent;
use crate::models::interval::WorkInterval;
use crate::models::punch_action::PunchAction;
use chrono::NaiveDateTime;

/// Running session state. A session is open while `clock_in` is set; the
/// employee is on break while `last_active` is unset and `break_start` is
/// set. `segments` buffers the active spans of the open session until its
/// CLOCK_OUT flushes them.
#[derive(Debug, Default)]
pub struct Reconstructor {
    clock_in: Option<NaiveDateTime>,
    last_active: Option<NaiveDateTime>,
    break_start: Option<NaiveDateTime>,
    segments: Vec<WorkInterval>,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one punch event. Returns the intervals emitted by this event:
    /// non-empty only for a CLOCK_OUT that closes a session.
    pub fn apply(&mut self, ev: &PunchEvent) -> Vec<WorkInterval> {
        let at = ev.occurred_at;

        match ev.action {
            PunchAction::ClockIn => {
                // An already-open session is discarded and restarted.
                self.clock_in = Some(at);
                self.last_active = Some(at);
                self.segments.clear();
                Vec::new()
            }

            PunchAction::BreakStart => {
                if let (Some(last), Some(_)) = (self.last_active, self.clock_in) {
                    self.push_segment(last, at);
                    self.break_start = Some(at);
                    self.last_active = None;
                }
                Vec::new()
            }

            PunchAction::BreakEnd => {
                if self.break_start.is_some() {
                    self.last_active = Some(at);
                    self.break_start = None;
                }
                Vec::new()
            }

            PunchAction::ClockOut => {
                if let (Some(_), Some(last)) = (self.clock_in, self.last_active) {
                    self.push_segment(last, at);
                    self.clock_in = None;
                    self.last_active = None;
                    std::mem::take(&mut self.segments)
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn push_segment(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        // zero-length spans carry no pay and would violate start < end
        if start < end {
            self.segments.push(WorkInterval { start, end });
        }
    }
}

/// Reconstruct all completed work intervals from a punch stream. Sessions
/// left open at the end of the stream emit nothing. Intervals come out in
/// the chronological order their sessions closed.
pub fn reconstruct(events: &[PunchEvent]) -> Vec<WorkInterval> {
    let mut state = Reconstructor::new();
    let mut out = Vec::new();

    for ev in events {
        out.extend(state.apply(ev));
    }

    out
}
