use crate::models::event::PunchEvent;
use csv::Writer;

/// Write the punch history as CSV.
pub fn write_csv(path: &str, events: &[PunchEvent]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["employee_id", "action", "occurred_at", "source"])?;

    for ev in events {
        wtr.write_record(&[
            ev.employee_id.to_string(),
            ev.action.as_str().to_string(),
            ev.occurred_at_str(),
            ev.source.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
