use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::period;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::format_amount;
use crate::utils::formatting::{bold, format_hours};
use crate::utils::time::resolve_now;
use chrono::NaiveDate;

/// Calculate payroll for a month (current month by default).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll {
        period: month,
        employee,
        json,
    } = &cli.command
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let employee_id = employee.unwrap_or(cfg.default_employee);

        //
        // Anchor timestamp: --period YYYY-MM or now. The window runs from
        // the month start to the payroll period boundary (04:00 on the
        // 1st of the next month).
        //
        let anchor = match month {
            Some(m) => NaiveDate::parse_from_str(&format!("{}-01", m), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(m.clone()))?
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            None => resolve_now(cli.now.as_ref())?,
        };

        let result = Core::monthly_payroll(&mut pool, employee_id, anchor)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            return Ok(());
        }

        header(format!(
            "Payroll {} (employee {})",
            anchor.format("%Y-%m"),
            employee_id
        ));

        println!(
            "Window:           {} → {}",
            period::start_of_month(anchor).format("%Y-%m-%d %H:%M"),
            period::end_of_payroll_period(anchor).format("%Y-%m-%d %H:%M")
        );
        println!(
            "Normal hours:     {}",
            format_hours(result.total_normal_hours)
        );
        println!(
            "Late-night hours: {}",
            colorize_optional(&format_hours(result.total_late_night_hours))
        );
        println!(
            "Total pay:        {}",
            bold(&format!("{}{}", cfg.currency, format_amount(result.total_pay)))
        );
    }

    Ok(())
}
