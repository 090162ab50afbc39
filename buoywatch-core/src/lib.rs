// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core domain types for the buoywatch telemetry pipeline.
//!
//! This crate defines the [`Reading`] record delivered by the feed, the
//! [`TimeLabel`] derived from its timestamp, the in-band [`FeedItem`]
//! stream item, and the [`BuoyError`] error type shared by all buoywatch
//! crates.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod feed_item;
pub mod has_timestamp;
pub mod reading;
pub mod time_label;

pub use self::error::{BuoyError, Result};
pub use self::feed_item::FeedItem;
pub use self::has_timestamp::HasTimestamp;
pub use self::reading::Reading;
pub use self::time_label::{LabelZone, TimeLabel};
