// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::{FeedItem, Reading};
use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A live subscription to the reading feed.
///
/// Yields [`FeedItem`]s in delivery order: the newest record existing at
/// subscription time, then every record that becomes the newest, with
/// feed-side errors reported in-band. The stream never ends while the
/// store is alive; dropping the subscription detaches it.
#[pin_project]
#[derive(Debug)]
pub struct FeedSubscription {
    #[pin]
    inner: UnboundedReceiverStream<FeedItem<Reading>>,
}

impl FeedSubscription {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<FeedItem<Reading>>) -> Self {
        Self {
            inner: UnboundedReceiverStream::new(rx),
        }
    }
}

impl Stream for FeedSubscription {
    type Item = FeedItem<Reading>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}
