// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

fn nan() -> f64 {
    f64::NAN
}

/// One buoy telemetry record as delivered by the feed.
///
/// The wire shape is `{latitude, longitude, fluorescence, timestamp}` with
/// the timestamp in milliseconds since the epoch, producer-supplied.
///
/// Readings are deliberately not validated: a field that is absent on the
/// wire deserializes to `NaN` (or `0` for the timestamp) and flows through
/// the readout, the chart and the relay payload unchanged. The handler
/// flags non-finite fields in the log but does not reject them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Position latitude in floating-point degrees
    #[serde(default = "nan")]
    pub latitude: f64,
    /// Position longitude in floating-point degrees
    #[serde(default = "nan")]
    pub longitude: f64,
    /// Chlorophyll fluorescence sensor value; unit undefined by the source
    #[serde(default = "nan")]
    pub fluorescence: f64,
    /// Milliseconds since the epoch, as supplied by the producer
    #[serde(rename = "timestamp", default)]
    pub timestamp_ms: i64,
}

impl Reading {
    /// Creates a new reading.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, fluorescence: f64, timestamp_ms: i64) -> Self {
        Self {
            latitude,
            longitude,
            fluorescence,
            timestamp_ms,
        }
    }

    /// Returns `true` when all numeric fields are finite.
    ///
    /// A `false` result marks a malformed record; callers log it and
    /// process the reading anyway.
    #[must_use]
    pub fn has_finite_fields(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.fluorescence.is_finite()
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading[lat={}, lon={}, fluorescence={}, timestamp={}ms]",
            self.latitude, self.longitude, self.fluorescence, self.timestamp_ms
        )
    }
}
