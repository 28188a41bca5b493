use super::goal::Goal;
use serde::Serialize;

/// Derived pay for a window of punch events. Field names follow the
/// upstream JSON contract.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayrollResult {
    #[serde(rename = "totalPay")]
    pub total_pay: i64,
    #[serde(rename = "totalNormalHours")]
    pub total_normal_hours: f64,
    #[serde(rename = "totalLateNightHours")]
    pub total_late_night_hours: f64,
}

/// Progress toward the active goal, or a zero report prompting goal
/// creation when none is active.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub target: Option<Goal>,
    #[serde(rename = "earnedAmount")]
    pub earned_amount: i64,
    #[serde(rename = "progressPercent")]
    pub progress_percent: f64,
    #[serde(rename = "neededAmount")]
    pub needed_amount: i64,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    pub message: String,
}

impl ProgressReport {
    /// Report returned when the employee has no active goal.
    pub fn no_active_goal() -> Self {
        Self {
            target: None,
            earned_amount: 0,
            progress_percent: 0.0,
            needed_amount: 0,
            is_completed: false,
            message: "Please set a new goal.".to_string(),
        }
    }
}
