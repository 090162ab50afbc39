// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tokio::task::JoinHandle;

use buoywatch_core::{FeedItem, Reading, TimeLabel};
use buoywatch_relay::{submit_detached, RelayPayload, RelaySink};
use buoywatch_surface::{ChartSurface, MapSurface, Readout};

use crate::options::DashboardOptions;

/// Text the connectivity slot is set to on every reading.
const CONNECTED: &str = "Connected";

/// The live-reading handler: one invocation per delivered reading.
///
/// For each reading it writes the three readout slots (and optionally
/// the connectivity slot), adds a map marker with an opened popup,
/// appends a label-deduplicated chart point, and fires a detached relay
/// submission. The synchronous part completes before the next reading
/// is dispatched; only the relay call suspends, and nothing waits on it.
///
/// Readings are not validated. Non-finite fields are flagged in the log
/// and then written, charted and relayed unchanged.
pub struct LiveReadingHandler<R, M, C> {
    readout: R,
    map: M,
    chart: C,
    relay: Arc<dyn RelaySink>,
    options: DashboardOptions,
}

impl<R, M, C> LiveReadingHandler<R, M, C>
where
    R: Readout,
    M: MapSurface,
    C: ChartSurface,
{
    /// Creates a handler over the given sinks and relay.
    pub fn new(readout: R, map: M, chart: C, relay: Arc<dyn RelaySink>, options: DashboardOptions) -> Self {
        Self {
            readout,
            map,
            chart,
            relay,
            options,
        }
    }

    /// Processes one delivered feed item.
    ///
    /// In-band feed errors are logged and skipped; the subscription is
    /// not this component's to repair. Returns the relay task handle for
    /// value items.
    pub fn on_item(&mut self, item: FeedItem<Reading>) -> Option<JoinHandle<()>> {
        match item {
            FeedItem::Value(reading) => Some(self.on_reading(reading)),
            FeedItem::Error(error) => {
                tracing::error!(%error, "feed delivered an error");
                None
            }
        }
    }

    /// Processes one reading.
    ///
    /// Returns the detached relay task's handle so tests can await its
    /// completion; the run loop discards it.
    pub fn on_reading(&mut self, reading: Reading) -> JoinHandle<()> {
        if !reading.has_finite_fields() {
            tracing::warn!(%reading, "reading has non-finite fields, processed unchanged");
        }

        self.readout.set_latitude(reading.latitude.to_string());
        self.readout.set_longitude(reading.longitude.to_string());
        self.readout.set_fluorescence(reading.fluorescence.to_string());
        if self.options.show_connectivity_indicator {
            self.readout.set_status(CONNECTED.to_string());
        }

        // One marker per reading, never deduplicated
        self.map.add_marker(
            reading.latitude,
            reading.longitude,
            format!("Fluorescence: {}", reading.fluorescence),
        );

        let label = TimeLabel::from_millis(reading.timestamp_ms, self.options.label_zone);
        self.chart.append_point(label.as_str(), reading.fluorescence);

        // Relayed regardless of the chart outcome
        let payload = RelayPayload::for_reading(&reading, &label);
        submit_detached(Arc::clone(&self.relay), payload)
    }

    /// The textual readout sink.
    pub fn readout(&self) -> &R {
        &self.readout
    }

    /// The map surface sink.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// The chart surface sink.
    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// The handler's options.
    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }
}
