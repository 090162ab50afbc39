// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rendering-surface seams for the buoywatch dashboard.
//!
//! The live-reading handler writes to three stateful sinks: a textual
//! readout, a map layer that accumulates markers, and a categorical
//! chart series deduplicated by label. Each sink is a small trait so the
//! handler is testable without a real rendering backend; the in-memory
//! implementations here double as the dashboard's retained state and as
//! test doubles.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod chart;
pub mod map;
pub mod readout;

pub use self::chart::{ChartSurface, FluorescenceSeries};
pub use self::map::{MapSurface, Marker, MarkerLayer};
pub use self::readout::{Readout, TextReadout};
