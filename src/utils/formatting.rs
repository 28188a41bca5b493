//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Thousands-separated currency amount: 8000 → "8,000".
pub fn format_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.abs().to_string();

    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative { format!("-{}", out) } else { out }
}

/// Minutes → human readable: 605 → "10h 05m".
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}h {:02}m", sign, m / 60, m % 60)
}

/// Render hours with two decimals, as shown in payroll summaries.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
