use crate::cli::parser::{Cli, Commands, GoalCommands};
use crate::config::Config;
use crate::core::goal::{get_progress, set_goal};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, progress_bar, success};
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::format_amount;
use crate::utils::time::resolve_now;

/// Manage savings goals: set a new goal or show progress.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { command } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let now = resolve_now(cli.now.as_ref())?;

        match command {
            GoalCommands::Set {
                target,
                description,
                employee,
            } => {
                let employee_id = employee.unwrap_or(cfg.default_employee);

                let goal = set_goal(&mut pool.conn, employee_id, *target, description, now)?;

                ttlog(
                    &pool.conn,
                    "goal_set",
                    &goal.description,
                    &format!(
                        "employee {} target {}{}",
                        employee_id,
                        cfg.currency,
                        format_amount(goal.target_amount)
                    ),
                )?;

                success(format!(
                    "New goal saved: \"{}\" — {}{}",
                    goal.description,
                    cfg.currency,
                    format_amount(goal.target_amount)
                ));
            }

            GoalCommands::Progress { employee, json } => {
                let employee_id = employee.unwrap_or(cfg.default_employee);

                let report = get_progress(&mut pool.conn, employee_id, now)?;

                if *json {
                    println!("{}", serde_json::to_string_pretty(&report).unwrap());
                    return Ok(());
                }

                match &report.target {
                    None => info(&report.message),
                    Some(goal) => {
                        println!("🎯 \"{}\" (employee {})", goal.description, employee_id);
                        println!(
                            "{}{}{}",
                            color_for_progress(report.progress_percent),
                            progress_bar(report.progress_percent, 20),
                            RESET
                        );
                        println!(
                            "Earned: {}{}  /  Target: {}{}",
                            cfg.currency,
                            format_amount(report.earned_amount),
                            cfg.currency,
                            format_amount(goal.target_amount)
                        );
                        println!("{}", report.message);
                    }
                }
            }
        }
    }

    Ok(())
}
