//! Goal lifecycle commands.
//!
//! Both operations are single transactional commands: the read, the
//! achievement decision and the writes share one immediate transaction, so
//! two concurrent calls cannot both observe the same old active goal and
//! leave an employee with zero or two active rows.

use crate::core::payroll;
use crate::core::period;
use crate::db::{goals, punches, rates};
use crate::errors::{AppError, AppResult};
use crate::models::goal::Goal;
use crate::models::payroll::ProgressReport;
use crate::utils::formatting::format_amount;
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};

/// Replace the employee's active goal.
///
/// The previous active goal, if any, is archived with its achievement
/// decided by the pay earned between its creation and the current payroll
/// period boundary. Validation happens before any state change.
pub fn set_goal(
    conn: &mut Connection,
    employee_id: i64,
    target_amount: i64,
    description: &str,
    now: NaiveDateTime,
) -> AppResult<Goal> {
    if target_amount <= 0 {
        return Err(AppError::Validation(
            "Target amount must be a positive value.".to_string(),
        ));
    }
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "A goal description is required.".to_string(),
        ));
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if let Some(old) = goals::active_goal(&tx, employee_id)? {
        let earned = earned_since(&tx, employee_id, old.created_at, now)?;
        goals::archive_goal(&tx, old.id, earned >= old.target_amount)?;
    }

    let goal = goals::insert_goal(&tx, employee_id, target_amount, description.trim(), now)?;

    tx.commit()?;
    Ok(goal)
}

/// Progress of the employee's active goal.
///
/// A goal created in an earlier calendar month expires here, lazily, the
/// first time progress is queried after the month boundary — archived as
/// not achieved and reported as "no active goal". The expire-check shares
/// the read's transaction so it cannot race a concurrent `set_goal`.
pub fn get_progress(
    conn: &mut Connection,
    employee_id: i64,
    now: NaiveDateTime,
) -> AppResult<ProgressReport> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let mut active = goals::active_goal(&tx, employee_id)?;

    if let Some(goal) = &active
        && period::in_earlier_month(goal.created_at, now)
    {
        goals::archive_goal(&tx, goal.id, false)?;
        active = None;
    }

    let report = match active {
        None => ProgressReport::no_active_goal(),
        Some(goal) => {
            let earned = earned_since(&tx, employee_id, goal.created_at, now)?;
            let target = goal.target_amount;

            let is_completed = earned >= target;
            let progress_percent = ((earned as f64 / target as f64) * 100.0).min(100.0);
            let needed_amount = (target - earned).max(0);

            let message = if is_completed {
                "🎉 Goal achieved! Set a new goal.".to_string()
            } else {
                format!("{} more to reach your goal", format_amount(needed_amount))
            };

            ProgressReport {
                target: Some(goal),
                earned_amount: earned,
                progress_percent,
                needed_amount,
                is_completed,
                message,
            }
        }
    };

    tx.commit()?;
    Ok(report)
}

/// Pay earned from `since` up to the payroll period boundary of `now`.
fn earned_since(
    conn: &Connection,
    employee_id: i64,
    since: NaiveDateTime,
    now: NaiveDateTime,
) -> AppResult<i64> {
    let rate = rates::current_rate(conn)?.ok_or(AppError::RateNotConfigured)?;
    let events = punches::list_between(
        conn,
        employee_id,
        since,
        period::end_of_payroll_period(now),
    )?;
    Ok(payroll::calculate(&events, &rate).total_pay)
}
