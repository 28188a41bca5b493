use crate::errors::AppResult;
use crate::models::rate::RateConfig;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Read the configured rates, if any. `None` means the owner has not run
/// `rate set` yet — callers surface that as `RateNotConfigured`.
pub fn current_rate(conn: &Connection) -> AppResult<Option<RateConfig>> {
    let mut stmt = conn.prepare("SELECT hourly_rate, late_night_rate FROM rates WHERE id = 1")?;

    let rate = stmt
        .query_row([], |row| {
            Ok(RateConfig {
                hourly_rate: row.get(0)?,
                late_night_rate: row.get(1)?,
            })
        })
        .optional()?;

    Ok(rate)
}

/// Write the singleton rate row (owner action).
pub fn upsert_rate(conn: &Connection, rate: &RateConfig) -> AppResult<()> {
    conn.execute(
        "INSERT INTO rates (id, hourly_rate, late_night_rate, updated_at)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
             hourly_rate = excluded.hourly_rate,
             late_night_rate = excluded.late_night_rate,
             updated_at = excluded.updated_at",
        params![
            rate.hourly_rate,
            rate.late_night_rate,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}
