// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the buoywatch workspace.
//!
//! Provides named reading fixtures, recording and failing relay doubles
//! with completion-notify channels, an error-injecting feed wrapper, and
//! assertion helpers. For development and testing only.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod readings;
pub mod relay_doubles;

use buoywatch_core::{FeedItem, Reading};
use futures::Stream;

pub use error_injection::ErrorInjectingFeed;
pub use helpers::assert_no_item_emitted;
pub use readings::{reading_baltic, reading_equator, reading_malformed, reading_tropic};
pub use relay_doubles::{FailingRelay, RecordingRelay};

/// Turns a list of readings into a finished feed stream of value items.
///
/// Useful for driving the dashboard run loop without a live store.
pub fn feed_of(readings: Vec<Reading>) -> impl Stream<Item = FeedItem<Reading>> + Send + Unpin {
    futures::stream::iter(readings.into_iter().map(FeedItem::Value))
}
