//! Display formatting for currency, counts, percentages and timestamps.

use chrono::{DateTime, Utc};

/// Format as US dollars with thousands separators and two decimals.
///
/// ```rust
/// use dashboard_core::format::format_currency;
///
/// assert_eq!(format_currency(125750.32), "$125,750.32");
/// assert_eq!(format_currency(-0.5), "-$0.50");
/// ```
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Format an integer count with thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

/// Signed percentage with two decimals, e.g. `+1.02%`.
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Label for an activity timestamp: hours for today, days for the last week,
/// a calendar date beyond that.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_days() < 1 {
        return format!("{}h ago", elapsed.num_hours());
    }
    match elapsed.num_days() {
        1 => "1 Day Ago".to_string(),
        days if days < 7 => format!("{} Days Ago", days),
        _ => then.format("%-d %b %Y").to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1825.2), "$1,825.20");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(57985), "57,985");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.02), "+1.02%");
        assert_eq!(format_percent(-0.3), "-0.30%");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 11, 6, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 Day Ago");
        assert_eq!(relative_time(now - Duration::seconds(10), now), "just now");

        let archived = Utc.with_ymd_and_hms(2020, 10, 30, 12, 0, 0).unwrap();
        assert_eq!(relative_time(archived, now), "30 Oct 2020");
    }
}
