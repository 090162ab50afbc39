// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Realtime reading feed for buoywatch.
//!
//! The feed is a push channel of [`Reading`](buoywatch_core::Reading)
//! records ordered by their producer-supplied timestamp. A subscription
//! is lazy, infinite and non-restartable: it delivers the newest record
//! existing at subscription time and every record that becomes the
//! newest thereafter, one at a time.
//!
//! [`FeedStore`] is the in-process implementation of those semantics;
//! the [`Feed`] trait is the seam behind which a remote realtime
//! database client would sit.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod config;
pub mod feed;
pub mod store;
pub mod subscription;

pub use self::config::FeedConfig;
pub use self::feed::Feed;
pub use self::store::FeedStore;
pub use self::subscription::FeedSubscription;
