// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use chrono::{Local, TimeZone, Utc};

/// Fallback label for timestamps chrono cannot represent.
const INVALID_LABEL: &str = "invalid time";

/// Which clock the time label is rendered against.
///
/// The label locale is implementation-defined upstream; here it is an
/// explicit option. `Local` matches the observed dashboard behavior,
/// `Utc` gives deterministic labels for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelZone {
    /// Render in the host's local time zone
    #[default]
    Local,
    /// Render in UTC
    Utc,
}

/// A time-of-day label (`HH:MM:SS`) derived from a reading's timestamp.
///
/// Labels are the chart's x-axis categories and its deduplication key:
/// two readings whose timestamps land in the same second render the same
/// label, and the second one is suppressed from the chart. The label is
/// also the `time` field of the relay payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeLabel(String);

impl TimeLabel {
    /// Formats the given epoch-milliseconds timestamp in the given zone.
    ///
    /// Out-of-range timestamps yield the fixed `"invalid time"` label
    /// rather than an error; a malformed timestamp still produces a
    /// marker and a relay call downstream.
    #[must_use]
    pub fn from_millis(timestamp_ms: i64, zone: LabelZone) -> Self {
        let rendered = match zone {
            LabelZone::Local => Local
                .timestamp_millis_opt(timestamp_ms)
                .single()
                .map(|dt| dt.format("%H:%M:%S").to_string()),
            LabelZone::Utc => Utc
                .timestamp_millis_opt(timestamp_ms)
                .single()
                .map(|dt| dt.format("%H:%M:%S").to_string()),
        };

        Self(rendered.unwrap_or_else(|| INVALID_LABEL.to_string()))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the label and returns the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TimeLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_time_of_day() {
        // 2023-11-14T22:13:20Z
        let label = TimeLabel::from_millis(1_700_000_000_000, LabelZone::Utc);
        assert_eq!(label.as_str(), "22:13:20");
    }

    #[test]
    fn same_second_yields_same_label() {
        let a = TimeLabel::from_millis(1_700_000_000_000, LabelZone::Utc);
        let b = TimeLabel::from_millis(1_700_000_000_999, LabelZone::Utc);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_timestamp_yields_invalid_label() {
        let label = TimeLabel::from_millis(i64::MAX, LabelZone::Utc);
        assert_eq!(label.as_str(), "invalid time");
    }
}
