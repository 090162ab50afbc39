// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::{Reading, TimeLabel};
use serde::{Deserialize, Serialize};

/// The JSON body POSTed to the logging endpoint for one reading.
///
/// Wire shape: `{time, latitude, longitude, fluorescence}` where `time`
/// is the reading's rendered time label. The payload is built for every
/// reading, independent of whether the chart append was suppressed, and
/// carries malformed (non-finite) values unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayPayload {
    /// Time-of-day label of the triggering reading
    pub time: String,
    /// Reading latitude in degrees
    pub latitude: f64,
    /// Reading longitude in degrees
    pub longitude: f64,
    /// Reading fluorescence value
    pub fluorescence: f64,
}

impl RelayPayload {
    /// Builds the payload for a reading and its rendered time label.
    #[must_use]
    pub fn for_reading(reading: &Reading, label: &TimeLabel) -> Self {
        Self {
            time: label.as_str().to_string(),
            latitude: reading.latitude,
            longitude: reading.longitude,
            fluorescence: reading.fluorescence,
        }
    }
}
