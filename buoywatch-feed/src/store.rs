// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::{BuoyError, FeedItem, HasTimestamp, Reading};
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::subscription::FeedSubscription;

/// An in-process realtime store of readings with latest-onward fan-out.
///
/// Records are kept sorted by their producer-supplied timestamp. A record
/// is delivered to subscribers only when it becomes the newest entry;
/// appending a record whose timestamp falls behind the current maximum
/// inserts it in order but notifies nobody, matching a feed query ordered
/// by timestamp and limited to the last entry.
///
/// Subscribing delivers the current newest record (when one exists)
/// followed by every new maximum appended afterwards. Subscriptions are
/// unbounded; a dropped subscription is pruned on the next fan-out.
///
/// # Examples
///
/// ```
/// use buoywatch_core::Reading;
/// use buoywatch_feed::{Feed, FeedStore};
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = FeedStore::new();
/// store.append(Reading::new(10.5, -20.25, 3.2, 1_700_000_000_000));
///
/// let mut subscription = store.subscribe().await.unwrap();
/// let first = subscription.next().await.unwrap().unwrap();
/// assert_eq!(first.fluorescence, 3.2);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct FeedStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Sorted ascending by timestamp; ties keep insertion order
    readings: Vec<Reading>,
    subscribers: Vec<mpsc::UnboundedSender<FeedItem<Reading>>>,
}

impl FeedStore {
    /// Creates an empty store with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reading, keeping the store ordered by timestamp.
    ///
    /// Fans the reading out to subscribers only when it is the newest
    /// entry after insertion.
    pub fn append(&self, reading: Reading) {
        let mut inner = self.inner.lock();

        let is_newest = inner
            .readings
            .last()
            .is_none_or(|last| reading.timestamp() >= last.timestamp());
        let position = inner
            .readings
            .partition_point(|existing| existing.timestamp() <= reading.timestamp());
        inner.readings.insert(position, reading);

        if is_newest {
            inner
                .subscribers
                .retain(|tx| tx.send(FeedItem::Value(reading)).is_ok());
        } else {
            tracing::debug!(%reading, "stale-timestamped reading stored without fan-out");
        }
    }

    /// Broadcasts an in-band feed error to all subscribers.
    ///
    /// The subscriptions stay open; the handler logs the error and keeps
    /// draining. Stored readings are unaffected.
    pub fn fail(&self, context: impl Into<String>) {
        let error = BuoyError::feed(context);
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|tx| tx.send(FeedItem::Error(error.clone())).is_ok());
    }

    /// Returns the newest stored reading, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Reading> {
        self.inner.lock().readings.last().copied()
    }

    /// Returns the number of stored readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().readings.len()
    }

    /// Returns `true` when no reading has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().readings.is_empty()
    }

    /// Returns the number of live subscriptions, counting ones not yet
    /// pruned by a fan-out.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    pub(crate) fn open_subscription(&self) -> FeedSubscription {
        let mut inner = self.inner.lock();
        let (tx, rx) = mpsc::unbounded_channel();

        // Deliver the newest existing record before any live fan-out
        if let Some(latest) = inner.readings.last().copied() {
            let _ = tx.send(FeedItem::Value(latest));
        }
        inner.subscribers.push(tx);

        FeedSubscription::new(rx)
    }
}
