// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use futures::{Stream, StreamExt};

use buoywatch_core::{FeedItem, Reading};
use buoywatch_relay::RelaySink;
use buoywatch_surface::{
    ChartSurface, FluorescenceSeries, MapSurface, MarkerLayer, Readout, TextReadout,
};

use crate::handler::LiveReadingHandler;
use crate::options::DashboardOptions;

/// The dashboard: a live-reading handler driven by a feed subscription.
///
/// Items are drained serially on the calling task, matching the
/// single-threaded event loop of the original surface: the synchronous
/// handler work for one reading finishes before the next is dispatched.
/// Relay submissions are detached and their handles discarded, so their
/// completions may interleave freely.
pub struct Dashboard<R, M, C> {
    handler: LiveReadingHandler<R, M, C>,
}

impl Dashboard<TextReadout, MarkerLayer, FluorescenceSeries> {
    /// Creates a dashboard over the in-memory surfaces.
    #[must_use]
    pub fn in_memory(relay: Arc<dyn RelaySink>, options: DashboardOptions) -> Self {
        Self::new(
            LiveReadingHandler::new(
                TextReadout::new(),
                MarkerLayer::new(),
                FluorescenceSeries::default(),
                relay,
                options,
            ),
        )
    }
}

impl<R, M, C> Dashboard<R, M, C>
where
    R: Readout,
    M: MapSurface,
    C: ChartSurface,
{
    /// Creates a dashboard around an existing handler.
    pub fn new(handler: LiveReadingHandler<R, M, C>) -> Self {
        Self { handler }
    }

    /// Drains the feed until it ends, one item at a time.
    ///
    /// A live subscription never ends on its own; this returns when the
    /// feed side is dropped. Feed errors are logged by the handler and
    /// do not stop the loop.
    pub async fn run<S>(&mut self, mut feed: S)
    where
        S: Stream<Item = FeedItem<Reading>> + Unpin,
    {
        while let Some(item) = feed.next().await {
            let _detached = self.handler.on_item(item);
        }
        tracing::info!("feed stream ended");
    }

    /// The underlying handler, for inspecting sink state.
    pub fn handler(&self) -> &LiveReadingHandler<R, M, C> {
        &self.handler
    }

    /// Mutable access to the underlying handler.
    pub fn handler_mut(&mut self) -> &mut LiveReadingHandler<R, M, C> {
        &mut self.handler
    }
}
