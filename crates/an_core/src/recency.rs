//! Relative-time labels ("3 hours ago") and the elapsed hours they encode.

use chrono::{DateTime, Utc};

/// Hours after which an article stops earning a recency bonus.
pub const RECENCY_WINDOW_HOURS: f64 = 5.0;

/// Parses a relative-time label into elapsed hours.
///
/// Unit words are matched anywhere in the lowercased label, checked in the
/// order seconds, minutes, hours, days. A missing leading number falls back to
/// one unit. Anything else yields `None`.
pub fn parse_elapsed_hours(label: &str) -> Option<f64> {
    let text = label.to_lowercase();

    if text.contains("second") {
        Some(0.0)
    } else if text.contains("minute") {
        Some(leading_number(&text).unwrap_or(1.0) / 60.0)
    } else if text.contains("hour") {
        Some(leading_number(&text).unwrap_or(1.0))
    } else if text.contains("day") {
        Some(leading_number(&text).unwrap_or(1.0) * 24.0)
    } else {
        None
    }
}

/// Bonus earned for being recent: `max(5 - hours, 0)`, or zero when unknown.
/// Negative elapsed times count as zero, so the bonus never exceeds 5.
pub fn recency_bonus(elapsed_hours: Option<f64>) -> f64 {
    elapsed_hours
        .map(|hours| (RECENCY_WINDOW_HOURS - hours.max(0.0)).max(0.0))
        .unwrap_or(0.0)
}

/// Integer prefix of `text`, skipping leading whitespace and accepting a sign.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<f64>().ok().map(|n| sign * n)
}

/// Formats the label a card shows for an article published at `published`.
pub fn label_since(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published).num_seconds().max(0);
    let (count, unit) = match seconds {
        s if s < 60 => (s, "second"),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s => (s / 86_400, "day"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}
