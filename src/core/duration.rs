//! Human-friendly duration formatting

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Render a number of seconds as days, hours, minutes and seconds.
///
/// Negative input yields `"unknown"` and zero yields `"None"`.
/// `12345` renders as `"3 hours, 25 minutes & 45 seconds"`.
pub fn human_duration(secs: i64) -> String {
    if secs < 0 {
        return "unknown".to_string();
    }
    if secs == 0 {
        return "None".to_string();
    }

    let days = secs / SECONDS_PER_DAY;
    let hours = secs % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = secs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = secs % SECONDS_PER_MINUTE;

    let mut parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(count, _)| *count != 0)
        .map(|(count, unit)| unit_part(count, unit))
        .collect();

    if seconds != 0 || parts.is_empty() {
        parts.push(unit_part(seconds, "second"));
    }

    let last = parts.pop().unwrap_or_default();
    if parts.is_empty() {
        last
    } else {
        format!("{} & {}", parts.join(", "), last)
    }
}

fn unit_part(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural}")
}
