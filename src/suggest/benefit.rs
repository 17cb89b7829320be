//! Turns free-text benefit descriptions into weekly-hours estimates.

use std::sync::OnceLock;

use regex::Regex;

/// Matches the first unsigned decimal number in a benefit string.
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("static pattern is valid"))
}

/// Parses a benefit string into estimated hours saved per week.
///
/// The first number in the text is taken as the value; "hour"/"hr" keeps it
/// as hours, "minute"/"min" divides by 60. A "per day"/"daily" qualifier
/// multiplies by 5 (work week), "per month"/"monthly" divides by 4; with no
/// qualifier the value is already weekly. The day check runs before the
/// month check.
///
/// Unrecognizable input yields `0.0`; this never fails.
#[must_use]
pub fn parse_weekly_hours(text: &str) -> f64 {
    let text = text.to_lowercase();

    let Some(found) = number_pattern().find(&text) else {
        return 0.0;
    };
    let Ok(value) = found.as_str().parse::<f64>() else {
        return 0.0;
    };

    let hours = if text.contains("hour") || text.contains("hr") {
        value
    } else if text.contains("minute") || text.contains("min") {
        value / 60.0
    } else {
        return 0.0;
    };

    if text.contains("per day") || text.contains("daily") {
        hours * 5.0
    } else if text.contains("per month") || text.contains("monthly") {
        hours / 4.0
    } else {
        hours
    }
}
