use chrono::NaiveDateTime;

/// An open period of active (non-break) work within one clock-in/clock-out
/// session. Derived from the punch log, never persisted.
/// Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WorkInterval {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
