use crate::core::{payroll, period};
use crate::db::pool::DbPool;
use crate::db::{punches, rates};
use crate::errors::{AppError, AppResult};
use crate::models::payroll::PayrollResult;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Pay for an explicit event window `[from, to)`.
    pub fn payroll_between(
        pool: &mut DbPool,
        employee_id: i64,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> AppResult<PayrollResult> {
        let rate = rates::current_rate(&pool.conn)?.ok_or(AppError::RateNotConfigured)?;
        let events = punches::list_between(&pool.conn, employee_id, from, to)?;
        Ok(payroll::calculate(&events, &rate))
    }

    /// Pay for `now`'s calendar month, closing at the payroll period
    /// boundary (04:00 on the 1st of the next month).
    pub fn monthly_payroll(
        pool: &mut DbPool,
        employee_id: i64,
        now: NaiveDateTime,
    ) -> AppResult<PayrollResult> {
        Self::payroll_between(
            pool,
            employee_id,
            period::start_of_month(now),
            period::end_of_payroll_period(now),
        )
    }
}
