//! Expiry countdown math.
//!
//! DESIGN
//! ======
//! The remaining time is `max(0, expiry - now)` split into whole days, hours,
//! minutes and seconds. Anything that cannot be read as a timestamp counts
//! as already expired, so a bad `expireAt` shows an all-zero badge instead
//! of an error.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use serde::Serialize;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const MS_PER_DAY: i128 = 86_400_000;
pub const MS_PER_HOUR: i128 = 3_600_000;
pub const MS_PER_MINUTE: i128 = 60_000;
pub const MS_PER_SECOND: i128 = 1_000;

/// Time left until a bonus box expires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CountdownValues {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownValues {
    /// Decompose a millisecond delta. Zero or negative deltas yield all zeros.
    #[must_use]
    pub fn from_millis(diff_ms: i128) -> Self {
        if diff_ms <= 0 {
            return Self::default();
        }
        let days = diff_ms / MS_PER_DAY;
        let hours = (diff_ms % MS_PER_DAY) / MS_PER_HOUR;
        let minutes = (diff_ms % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (diff_ms % MS_PER_MINUTE) / MS_PER_SECOND;
        Self {
            days: u64::try_from(days).unwrap_or(u64::MAX),
            hours: u64::try_from(hours).unwrap_or_default(),
            minutes: u64::try_from(minutes).unwrap_or_default(),
            seconds: u64::try_from(seconds).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(86_400)
            .saturating_add(self.hours * 3_600)
            .saturating_add(self.minutes * 60)
            .saturating_add(self.seconds)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Zero-padded `(value, unit)` pairs in display order.
    #[must_use]
    pub fn segments(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "d"),
            (format!("{:02}", self.hours), "h"),
            (format!("{:02}", self.minutes), "m"),
            (format!("{:02}", self.seconds), "s"),
        ]
    }

    /// Compact label such as `03d 04h 05m 06s`.
    #[must_use]
    pub fn label(&self) -> String {
        self.segments()
            .iter()
            .map(|(value, unit)| format!("{value}{unit}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse an editor-supplied expiry timestamp.
///
/// Accepts RFC 3339 (including `toISOString` output), ISO-8601 with or
/// without an offset, and bare dates. Offset-less values are read as UTC.
#[must_use]
pub fn parse_expiry(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(ts);
    }
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Some(ts);
    }
    if let Ok(ts) = PrimitiveDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Some(ts.assume_utc());
    }
    if let Ok(date) = Date::parse(trimmed, &Iso8601::DEFAULT) {
        return Some(date.midnight().assume_utc());
    }
    tracing::debug!(raw = trimmed, "unreadable expireAt; countdown stays at zero");
    None
}

/// Remaining time from `now` until `expire_at`.
#[must_use]
pub fn countdown_at(expire_at: Option<&str>, now: OffsetDateTime) -> CountdownValues {
    let Some(expiry) = expire_at.and_then(parse_expiry) else {
        return CountdownValues::default();
    };
    CountdownValues::from_millis((expiry - now).whole_milliseconds())
}

/// Remaining time from the current UTC clock until `expire_at`.
#[must_use]
pub fn countdown(expire_at: Option<&str>) -> CountdownValues {
    countdown_at(expire_at, OffsetDateTime::now_utc())
}
