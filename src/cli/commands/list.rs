use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconstruct::reconstruct;
use crate::db::pool::DbPool;
use crate::db::punches;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        employee,
        today: only_today,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let employee_id = employee.unwrap_or(cfg.default_employee);

        //
        // Resolve the window: --today, --period, or the current month
        //
        let (from, to) = if *only_today {
            date::period_bounds(&date::today().to_string()).map_err(AppError::InvalidDate)?
        } else {
            match period {
                Some(p) => date::period_bounds(p).map_err(AppError::InvalidDate)?,
                None => date::period_bounds(&date::today().format("%Y-%m").to_string())
                    .map_err(AppError::InvalidDate)?,
            }
        };

        let events = punches::list_between(&pool.conn, employee_id, from, to)?;

        if events.is_empty() {
            println!(
                "No punches for employee {} between {} and {}.",
                employee_id,
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            );
            return Ok(());
        }

        println!(
            "📅 Punches for employee {} ({} → {}):\n",
            employee_id,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        );

        let mut table = Table::new(&["ID", "DATE", "TIME", "ACTION", "SOURCE"]);
        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.date_str(),
                ev.time_str(),
                ev.action.as_str().to_string(),
                ev.source.clone(),
            ]);
        }
        print!("{}", table.render());

        //
        // Completed sessions summary
        //
        let intervals = reconstruct(&events);
        let worked: i64 = intervals.iter().map(|iv| iv.duration_minutes()).sum();

        println!(
            "\n{} events, {} completed work intervals, {} active time",
            events.len(),
            intervals.len(),
            mins2readable(worked)
        );
    }

    Ok(())
}
