//! Period tokens and the fixed-duration windows they resolve to.
//!
//! Windows are plain lookbacks from a reference instant: `weekly` is the last
//! 7 days, `monthly` the last 30, `yearly` the last 365. They are not aligned
//! to calendar weeks or months, and the trend buckets rely on the same 30-day
//! convention.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Period granularity used by analytics windows, reports and budget limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    /// Parses a free-text token. Anything unrecognized is treated as monthly.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "weekly" => Period::Weekly,
            "yearly" => Period::Yearly,
            _ => Period::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn lookback_days(&self) -> i64 {
        match self {
            Period::Weekly => 7,
            Period::Monthly => 30,
            Period::Yearly => 365,
        }
    }

    /// Resolves the window `[now - lookback, now]`.
    pub fn window_ending_at(&self, now: NaiveDateTime) -> TimeWindow {
        TimeWindow {
            start: now - Duration::days(self.lookback_days()),
            end: now,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of creation timestamps. Both bounds are inclusive when handed to a
/// store; [`TimeWindow::contains_half_open`] narrows it to `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn contains_half_open(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Resolves a free-text period token against a reference instant.
pub fn resolve_window(token: &str, now: NaiveDateTime) -> TimeWindow {
    Period::from_token(token).window_ending_at(now)
}
