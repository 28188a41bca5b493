use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Hourly pay rates. Singleton row, written only by the owner `rate set`
/// command and read by the payroll calculator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateConfig {
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "lateNightRate")]
    pub late_night_rate: f64,
}

impl RateConfig {
    pub fn new(hourly_rate: f64, late_night_rate: f64) -> AppResult<Self> {
        if !(hourly_rate.is_finite() && hourly_rate > 0.0)
            || !(late_night_rate.is_finite() && late_night_rate > 0.0)
        {
            return Err(AppError::Validation(
                "Hourly and late-night rates must be positive numbers.".to_string(),
            ));
        }
        Ok(Self {
            hourly_rate,
            late_night_rate,
        })
    }
}
