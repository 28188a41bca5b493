use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "rate_set" => Colour::Yellow,
        "goal_set" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migrat") => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        print_log(&pool)?;
    }

    Ok(())
}

fn print_log(pool: &DbPool) -> AppResult<()> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: String = row.get(3)?;
        let message: String = row.get(4)?;

        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok((id, date, operation, target, message))
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    println!("📜 Internal log:\n");

    for (id, date, operation, target, message) in entries {
        let color = color_for_operation(&operation);

        let op_target = if target.is_empty() {
            operation.clone()
        } else {
            format!("{operation} ({target})")
        };

        // Truncate to 60 visible characters, ANSI excluded
        let visible = strip_ansi(&op_target);
        let shown = if visible.len() > 60 {
            let mut s = visible.chars().take(57).collect::<String>();
            s.push_str("...");
            s
        } else {
            visible
        };

        println!(
            "{:>4}  {}  {:<60}  {}",
            id,
            date,
            color.paint(shown).to_string(),
            message
        );
    }

    Ok(())
}
