// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use buoywatch_core::Result;

use crate::store::FeedStore;
use crate::subscription::FeedSubscription;

/// The subscription seam of the reading feed.
///
/// A feed hands out lazy, infinite, non-restartable subscriptions that
/// deliver the newest existing record and then every newly appended one.
/// [`FeedStore`] implements it in-process; a client for a hosted
/// realtime database would implement the same trait.
#[async_trait]
pub trait Feed {
    /// Opens a latest-onward subscription.
    ///
    /// # Errors
    /// Returns `Err(BuoyError::Feed)` when the feed cannot be reached.
    async fn subscribe(&self) -> Result<FeedSubscription>;
}

#[async_trait]
impl Feed for FeedStore {
    async fn subscribe(&self) -> Result<FeedSubscription> {
        Ok(self.open_subscription())
    }
}
