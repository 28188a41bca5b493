use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL PUNCHES / EMPLOYEES
    //
    let punches: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))?;
    let employees: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT employee_id) FROM punches",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Total punches:{} {}{}{}",
        CYAN, RESET, GREEN, punches, RESET
    );
    println!(
        "{}• Employees:{}     {}{}{}",
        CYAN, RESET, GREEN, employees, RESET
    );

    //
    // 3) PUNCH RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT occurred_at FROM punches ORDER BY occurred_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT occurred_at FROM punches ORDER BY occurred_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Punch range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) GOALS
    //
    let goals: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))?;
    let active_goals: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM goals WHERE is_active = 1",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Goals:{} {} ({} active)",
        CYAN, RESET, goals, active_goals
    );

    //
    // 5) RATES CONFIGURED?
    //
    let has_rates: Option<i64> = pool
        .conn
        .query_row("SELECT id FROM rates WHERE id = 1", [], |row| row.get(0))
        .optional()?;

    let rates_str = if has_rates.is_some() {
        format!("{GREEN}configured{RESET}")
    } else {
        format!("{GREY}not configured{RESET}")
    };
    println!("{}• Rates:{} {}", CYAN, RESET, rates_str);

    println!();
    Ok(())
}
