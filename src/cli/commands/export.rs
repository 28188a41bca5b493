use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        employee,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let employee_id = employee.unwrap_or(cfg.default_employee);

        ExportLogic::run(&mut pool, employee_id, format, file, range.as_ref(), *force)?;
    }

    Ok(())
}
