use super::punch_action::PunchAction;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Storage format for `punches.occurred_at`. Whole-minute precision: the
/// punch log never records seconds.
pub const OCCURRED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    #[serde(rename = "employeeId")]
    pub employee_id: i64,
    pub action: PunchAction, // ⇔ punches.action
    #[serde(rename = "occurredAt")]
    pub occurred_at: NaiveDateTime, // ⇔ punches.occurred_at (TEXT "YYYY-MM-DD HH:MM")
    pub source: String,      // ⇔ punches.source (TEXT, default 'cli')
    #[serde(rename = "createdAt")]
    pub created_at: String, // ⇔ punches.created_at (TEXT, ISO8601)
}

impl PunchEvent {
    /// High-level constructor for events created by the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(id: i64, employee_id: i64, action: PunchAction, occurred_at: NaiveDateTime) -> Self {
        Self {
            id,
            employee_id,
            action,
            occurred_at,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn occurred_at_str(&self) -> String {
        self.occurred_at.format(OCCURRED_AT_FORMAT).to_string()
    }

    pub fn date_str(&self) -> String {
        self.occurred_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.occurred_at.format("%H:%M").to_string()
    }
}
