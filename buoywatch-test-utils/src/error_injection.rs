// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Feed wrapper that injects an in-band error for testing how the
//! dashboard tolerates feed-side failures.

use buoywatch_core::{BuoyError, FeedItem, Reading};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Wraps a stream of readings, emitting them as [`FeedItem::Value`] and
/// injecting a single [`FeedItem::Error`] at the given position.
///
/// # Examples
///
/// ```rust
/// use buoywatch_test_utils::{reading_tropic, ErrorInjectingFeed};
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let base = stream::iter(vec![reading_tropic(), reading_tropic()]);
/// let mut feed = ErrorInjectingFeed::new(base, 1);
///
/// assert!(feed.next().await.unwrap().is_value());
/// assert!(feed.next().await.unwrap().is_error());
/// assert!(feed.next().await.unwrap().is_value());
/// # }
/// ```
pub struct ErrorInjectingFeed<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingFeed<S> {
    /// Creates the wrapper; `inject_error_at` is 0-indexed over emitted
    /// items.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingFeed<S>
where
    S: Stream<Item = Reading> + Unpin,
{
    type Item = FeedItem<Reading>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Poll::Ready(Some(FeedItem::Error(BuoyError::feed(
                    "injected feed error",
                ))));
            }
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(reading)) => {
                self.count += 1;
                Poll::Ready(Some(FeedItem::Value(reading)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
