// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live buoy-telemetry dashboard pipeline.
//!
//! buoywatch subscribes to a push feed of buoy readings (position,
//! chlorophyll fluorescence, timestamp), renders each newest reading
//! onto injectable readout/map/chart sinks, and forwards it to a
//! spreadsheet-style HTTP logging endpoint, fire-and-forget.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use buoywatch::{Dashboard, DashboardOptions};
//! use buoywatch_core::{LabelZone, Reading};
//! use buoywatch_feed::{Feed, FeedStore};
//! use buoywatch_test_utils::RecordingRelay;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let store = Arc::new(FeedStore::new());
//! let subscription = store.subscribe().await?;
//!
//! let (relay, mut relayed) = RecordingRelay::new();
//! let options = DashboardOptions::default().with_label_zone(LabelZone::Utc);
//! let mut dashboard = Dashboard::in_memory(relay.clone(), options);
//!
//! store.append(Reading::new(10.5, -20.25, 3.2, 1_700_000_000_000));
//! drop(store); // ends the subscription once drained
//!
//! dashboard.run(subscription).await;
//! relayed.recv().await;
//!
//! assert_eq!(dashboard.handler().readout().fluorescence, "3.2");
//! assert_eq!(relay.submissions()[0].time, "22:13:20");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod dashboard;
pub mod handler;
pub mod options;

pub use self::dashboard::Dashboard;
pub use self::handler::LiveReadingHandler;
pub use self::options::DashboardOptions;

pub use buoywatch_core::{BuoyError, FeedItem, LabelZone, Reading, Result, TimeLabel};
pub use buoywatch_feed::{Feed, FeedConfig, FeedStore, FeedSubscription};
pub use buoywatch_relay::{HttpRelay, RelayConfig, RelayPayload, RelaySink};
pub use buoywatch_surface::{
    ChartSurface, FluorescenceSeries, MapSurface, Marker, MarkerLayer, Readout, TextReadout,
};
