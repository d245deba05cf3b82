//! Display formatting for money, durations, and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format cents as dollars, e.g. `4500` → `"$45.00"`.
#[must_use]
pub fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Format minutes as a lesson duration, e.g. `75` → `"1 h 15 min"`.
#[must_use]
pub fn duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Format a 0–5 rating with one decimal, e.g. `4.75` → `"4.8"`.
#[must_use]
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}
