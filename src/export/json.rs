use crate::models::event::PunchEvent;

/// Write the punch history as pretty-printed JSON.
pub fn write_json(path: &str, events: &[PunchEvent]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(events).unwrap();
    std::fs::write(path, json)
}
