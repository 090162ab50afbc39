// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use buoywatch_core::Result;

use crate::payload::RelayPayload;

/// The outbound seam to the logging endpoint.
///
/// Implementations submit one payload and return the endpoint's parsed
/// JSON response. Callers treat the sink as order-insensitive: detached
/// submissions may complete out of their origination order.
#[async_trait]
pub trait RelaySink: Send + Sync {
    /// Submits one payload to the logging endpoint.
    ///
    /// # Errors
    /// Returns `Err(BuoyError::Relay)` or `Err(BuoyError::RelayStatus)`
    /// on transport failure, non-success status, or a non-JSON response.
    async fn submit(&self, payload: RelayPayload) -> Result<serde_json::Value>;
}
