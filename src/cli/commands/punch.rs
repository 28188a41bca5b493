use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::punches;
use crate::errors::{AppError, AppResult};
use crate::models::event::PunchEvent;
use crate::models::punch_action::PunchAction;
use crate::ui::messages::{success, warning};
use crate::utils::time::{parse_optional_datetime, resolve_now};

/// Record a punch event.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        action,
        at,
        employee,
    } = &cli.command
    {
        //
        // 1. Parse action (mandatory)
        //
        let action = PunchAction::from_cli_str(action).ok_or_else(|| {
            AppError::InvalidAction(format!("'{}'. Use one of: in, break, resume, out", action))
        })?;

        //
        // 2. Resolve punch time: --at wins, otherwise now
        //
        let occurred_at = match parse_optional_datetime(at.as_ref())? {
            Some(t) => t,
            None => resolve_now(cli.now.as_ref())?,
        };

        //
        // 3. Resolve employee
        //
        let employee_id = employee.unwrap_or(cfg.default_employee);

        //
        // 4. Open DB and record
        //
        let pool = DbPool::new(&cfg.database)?;

        // The engine is lenient with odd sequences; the CLI only warns.
        if let Some(last) = punches::last_punch(&pool.conn, employee_id)?
            && last.occurred_at > occurred_at
        {
            warning(format!(
                "Punch at {} is earlier than the last recorded punch ({}).",
                occurred_at.format("%Y-%m-%d %H:%M"),
                last.occurred_at_str()
            ));
        }

        let ev = PunchEvent::new(0, employee_id, action, occurred_at);
        punches::insert_punch(&pool.conn, &ev)?;

        ttlog(
            &pool.conn,
            "punch",
            action.as_str(),
            &format!(
                "employee {} {} at {}",
                employee_id,
                action.as_str(),
                ev.occurred_at_str()
            ),
        )?;

        let verb = match action {
            PunchAction::ClockIn => "Clocked in",
            PunchAction::BreakStart => "Break started",
            PunchAction::BreakEnd => "Break ended",
            PunchAction::ClockOut => "Clocked out",
        };
        success(format!(
            "{} at {} (employee {})",
            verb,
            ev.occurred_at_str(),
            employee_id
        ));
    }

    Ok(())
}
