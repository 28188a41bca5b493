use crate::errors::{AppError, AppResult};
use crate::models::event::{OCCURRED_AT_FORMAT, PunchEvent};
use crate::models::punch_action::PunchAction;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<PunchEvent> {
    let occurred_str: String = row.get("occurred_at")?;
    let occurred_at =
        NaiveDateTime::parse_from_str(&occurred_str, OCCURRED_AT_FORMAT).map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(occurred_str.clone())),
            )
        })?;

    let action_str: String = row.get("action")?;
    let action = PunchAction::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        action,
        occurred_at,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_punch(conn: &Connection, ev: &PunchEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO punches (employee_id, action, occurred_at, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.employee_id,
            ev.action.to_db_str(),
            ev.occurred_at_str(),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// Load one employee's punches in `[from, to)`, ordered by occurrence.
/// The zero-padded timestamp format makes the TEXT comparison chronological.
pub fn list_between(
    conn: &Connection,
    employee_id: i64,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE employee_id = ?1 AND occurred_at >= ?2 AND occurred_at < ?3
         ORDER BY occurred_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            from.format(OCCURRED_AT_FORMAT).to_string(),
            to.format(OCCURRED_AT_FORMAT).to_string(),
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The most recent punch for an employee, if any.
pub fn last_punch(conn: &Connection, employee_id: i64) -> AppResult<Option<PunchEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE employee_id = ?1
         ORDER BY occurred_at DESC, id DESC
         LIMIT 1",
    )?;

    let ev = stmt.query_row(params![employee_id], map_row).optional()?;
    Ok(ev)
}
