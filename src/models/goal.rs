use chrono::NaiveDateTime;
use serde::Serialize;

/// A savings goal. At most one goal per employee is active at any time;
/// an active goal leaves that state only by being archived (replaced or
/// expired at a month boundary), never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub id: i64,
    #[serde(rename = "employeeId")]
    pub employee_id: i64,
    #[serde(rename = "targetAmount")]
    pub target_amount: i64,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isAchieved")]
    pub is_achieved: bool,
}
