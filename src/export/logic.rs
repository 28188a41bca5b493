use crate::db::pool::DbPool;
use crate::db::punches;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::utils::date;
use std::path::Path;

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        pool: &mut DbPool,
        employee_id: i64,
        format: &ExportFormat,
        file: &str,
        range: Option<&String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists. Use --force to overwrite.",
                file
            )));
        }

        // ------------------------------------------------
        // Resolve the event window (default: current year)
        // ------------------------------------------------
        let (from, to) = match range {
            Some(r) => date::period_bounds(r).map_err(AppError::InvalidDate)?,
            None => date::period_bounds(&date::today().format("%Y").to_string())
                .map_err(AppError::InvalidDate)?,
        };

        let events = punches::list_between(&pool.conn, employee_id, from, to)?;

        if events.is_empty() {
            return Err(AppError::Export(
                "No punch events in the selected range.".to_string(),
            ));
        }

        match format {
            ExportFormat::Csv => csv::write_csv(file, &events)?,
            ExportFormat::Json => json::write_json(file, &events)?,
        }

        notify_export_success(
            match format {
                ExportFormat::Csv => "CSV",
                ExportFormat::Json => "JSON",
            },
            path,
        );

        Ok(())
    }
}
