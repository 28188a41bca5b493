use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchAction {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl PunchAction {
    /// Parse a CLI action name (`in`, `break`, `resume`, `out`).
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "clock-in" => Some(Self::ClockIn),
            "break" | "break-start" => Some(Self::BreakStart),
            "resume" | "break-end" => Some(Self::BreakEnd),
            "out" | "clock-out" => Some(Self::ClockOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchAction::ClockIn => "clock_in",
            PunchAction::BreakStart => "break_start",
            PunchAction::BreakEnd => "break_end",
            PunchAction::ClockOut => "clock_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(PunchAction::ClockIn),
            "break_start" => Some(PunchAction::BreakStart),
            "break_end" => Some(PunchAction::BreakEnd),
            "clock_out" => Some(PunchAction::ClockOut),
            _ => None,
        }
    }

    /// Wire/display name, matching the upstream client convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchAction::ClockIn => "CLOCK_IN",
            PunchAction::BreakStart => "BREAK_START",
            PunchAction::BreakEnd => "BREAK_END",
            PunchAction::ClockOut => "CLOCK_OUT",
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, PunchAction::ClockIn)
    }

    pub fn is_clock_out(&self) -> bool {
        matches!(self, PunchAction::ClockOut)
    }
}
