use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `punches` table has an `employee_id` column.
fn punches_has_employee_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('punches')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "employee_id" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `punches` table with the modern schema (including `employee_id`).
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL DEFAULT 1,
            action       TEXT NOT NULL CHECK(action IN ('clock_in','break_start','break_end','clock_out')),
            occurred_at  TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_employee_at ON punches(employee_id, occurred_at);
        CREATE INDEX IF NOT EXISTS idx_punches_action ON punches(action);
        "#,
    )?;
    Ok(())
}

/// Migrate a single-employee `punches` table to include `employee_id`.
fn migrate_add_employee_to_punches(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "punches")? {
        return Ok(()); // no table yet, nothing to migrate
    }

    if punches_has_employee_column(conn)? {
        return Ok(()); // already present
    }

    warning("Adding 'employee_id' column to punches table...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE punches RENAME TO punches_old;

        CREATE TABLE punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL DEFAULT 1,
            action       TEXT NOT NULL CHECK(action IN ('clock_in','break_start','break_end','clock_out')),
            occurred_at  TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        INSERT INTO punches (id, action, occurred_at, source, created_at)
        SELECT id, action, occurred_at, source, created_at
        FROM punches_old;

        DROP TABLE punches_old;

        CREATE INDEX IF NOT EXISTS idx_punches_employee_at ON punches(employee_id, occurred_at);
        CREATE INDEX IF NOT EXISTS idx_punches_action ON punches(action);

        UPDATE sqlite_sequence
            SET seq = (SELECT IFNULL(MAX(id), 0) FROM punches)
        WHERE name = 'punches';

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )?;

    Ok(())
}

/// Create the singleton `rates` table.
fn create_rates_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS rates (
            id              INTEGER PRIMARY KEY CHECK(id = 1),
            hourly_rate     REAL NOT NULL CHECK(hourly_rate > 0),
            late_night_rate REAL NOT NULL CHECK(late_night_rate > 0),
            updated_at      TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `goals` table. The partial unique index backs the
/// one-active-goal-per-employee invariant at the schema level.
fn create_goals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS goals (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL,
            target_amount INTEGER NOT NULL CHECK(target_amount > 0),
            description   TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            is_active     INTEGER NOT NULL DEFAULT 0,
            is_achieved   INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_goals_employee ON goals(employee_id, is_active);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_goals_one_active ON goals(employee_id) WHERE is_active = 1;
        "#,
    )?;
    Ok(())
}

/// Run every pending migration. Safe to call repeatedly: each step checks
/// the current schema before touching it.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_add_employee_to_punches(conn)?;
    create_punches_table(conn)?;
    create_rates_table(conn)?;
    create_goals_table(conn)?;
    Ok(())
}
