use crate::cli::parser::{Commands, RateCommands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::rates;
use crate::errors::AppResult;
use crate::models::rate::RateConfig;
use crate::ui::messages::{success, warning};
use crate::utils::format_amount;

/// Show or set the hourly pay rates (owner action).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { command } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match command {
            RateCommands::Set { hourly, late_night } => {
                // Rejected before any write.
                let rate = RateConfig::new(*hourly, *late_night)?;

                rates::upsert_rate(&pool.conn, &rate)?;

                ttlog(
                    &pool.conn,
                    "rate_set",
                    "",
                    &format!(
                        "hourly {} / late-night {}",
                        rate.hourly_rate, rate.late_night_rate
                    ),
                )?;

                success(format!(
                    "Rates updated: {}{}/h normal, {}{}/h late-night (22:00-04:00)",
                    cfg.currency,
                    format_amount(rate.hourly_rate as i64),
                    cfg.currency,
                    format_amount(rate.late_night_rate as i64)
                ));
            }

            RateCommands::Show => match rates::current_rate(&pool.conn)? {
                Some(rate) => {
                    println!("Hourly rate:     {}{}", cfg.currency, rate.hourly_rate);
                    println!("Late-night rate: {}{}", cfg.currency, rate.late_night_rate);
                }
                None => {
                    warning("Rates are not configured yet. Run `rate set` first.");
                }
            },
        }
    }

    Ok(())
}
