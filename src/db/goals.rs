use crate::errors::{AppError, AppResult};
use crate::models::event::OCCURRED_AT_FORMAT;
use crate::models::goal::Goal;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// All functions here take a plain `&Connection` so the goal engine can
/// compose them into one transaction (`Transaction` derefs to `Connection`).
pub fn map_row(row: &Row) -> Result<Goal> {
    let created_str: String = row.get("created_at")?;
    let created_at =
        NaiveDateTime::parse_from_str(&created_str, OCCURRED_AT_FORMAT).map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(created_str.clone())),
            )
        })?;

    Ok(Goal {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        target_amount: row.get("target_amount")?,
        description: row.get("description")?,
        created_at,
        is_active: row.get::<_, i64>("is_active")? == 1,
        is_achieved: row.get::<_, i64>("is_achieved")? == 1,
    })
}

/// The employee's active goal, if any. At most one row can match.
pub fn active_goal(conn: &Connection, employee_id: i64) -> AppResult<Option<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM goals
         WHERE employee_id = ?1 AND is_active = 1
         ORDER BY created_at DESC
         LIMIT 1",
    )?;

    let goal = stmt.query_row(params![employee_id], map_row).optional()?;
    Ok(goal)
}

/// Deactivate a goal, recording whether it was achieved.
pub fn archive_goal(conn: &Connection, id: i64, achieved: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE goals SET is_active = 0, is_achieved = ?2 WHERE id = ?1",
        params![id, if achieved { 1 } else { 0 }],
    )?;
    Ok(())
}

/// Insert a new goal as the employee's sole active one. The caller must
/// have archived any previous active goal first in the same transaction,
/// or the partial unique index rejects the insert.
pub fn insert_goal(
    conn: &Connection,
    employee_id: i64,
    target_amount: i64,
    description: &str,
    created_at: NaiveDateTime,
) -> AppResult<Goal> {
    conn.execute(
        "INSERT INTO goals (employee_id, target_amount, description, created_at, is_active, is_achieved)
         VALUES (?1, ?2, ?3, ?4, 1, 0)",
        params![
            employee_id,
            target_amount,
            description,
            created_at.format(OCCURRED_AT_FORMAT).to_string(),
        ],
    )?;

    Ok(Goal {
        id: conn.last_insert_rowid(),
        employee_id,
        target_amount,
        description: description.to_string(),
        created_at,
        is_active: true,
        is_achieved: false,
    })
}
