/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// 100% → green
/// >= 50% → yellow
/// below → reset
pub fn color_for_progress(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 50.0 {
        YELLOW
    } else {
        RESET
    }
}

/// Late-night minutes render dimmed when zero.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "0.00" || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
