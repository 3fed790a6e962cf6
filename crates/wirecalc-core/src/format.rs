// ── Duration and ETA formatting ──

use chrono::{DateTime, Duration, Local};
use serde::Serialize;

/// Whole-unit breakdown of a duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose fractional seconds into whole days/hours/minutes/seconds.
    ///
    /// Truncates toward zero, so sub-second durations come out all-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions
    )]
    pub fn from_seconds(total_seconds: f64) -> Self {
        let secs = total_seconds.max(0.0) as u64;
        Self {
            days: secs / 86_400,
            hours: (secs % 86_400) / 3_600,
            minutes: (secs % 3_600) / 60,
            seconds: secs % 60,
        }
    }

    /// Render as a phrase like `1 day, 1 hour, 1 minute, 1 second`.
    ///
    /// Zero-valued units are skipped, descending order, and the seconds
    /// component is kept when it is all there is. Never returns an empty
    /// string; a sub-second duration reads `0 seconds`.
    pub fn phrase(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.days > 0 {
            parts.push(count_noun(self.days, "day"));
        }
        if self.hours > 0 {
            parts.push(count_noun(self.hours, "hour"));
        }
        if self.minutes > 0 {
            parts.push(count_noun(self.minutes, "minute"));
        }
        if self.seconds > 0 || parts.is_empty() {
            parts.push(count_noun(self.seconds, "second"));
        }
        parts.join(", ")
    }
}

/// `1 day` / `2 days` style counted noun.
fn count_noun(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Wall-clock completion time, rendered `hh:mm AM/PM` with a zero-padded
/// 12-hour clock (`02:31 PM`, `12:01 AM`).
///
/// Durations large enough to overflow the calendar saturate to `now`.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
pub fn eta(now: DateTime<Local>, total_seconds: f64) -> String {
    let offset = Duration::milliseconds((total_seconds * 1000.0) as i64);
    let completion = now.checked_add_signed(offset).unwrap_or(now);
    completion.format("%I:%M %p").to_string()
}
