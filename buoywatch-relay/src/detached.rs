// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::payload::RelayPayload;
use crate::sink::RelaySink;

/// Submits a payload on a detached task, fire-and-forget.
///
/// The caller never blocks on or depends on the outcome: the endpoint's
/// JSON response is logged at `info`, any failure at `error`, and
/// nothing else happens either way. Submissions for different readings
/// may complete out of order relative to their origination order.
///
/// The join handle is returned so tests can await completion; the
/// dashboard run loop discards it.
pub fn submit_detached(sink: Arc<dyn RelaySink>, payload: RelayPayload) -> JoinHandle<()> {
    tokio::spawn(async move {
        match sink.submit(payload).await {
            Ok(response) => {
                tracing::info!(%response, "logging endpoint update");
            }
            Err(error) => {
                tracing::error!(%error, "logging endpoint update failed");
            }
        }
    })
}
