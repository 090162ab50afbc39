// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Relay sink doubles for testing the fire-and-forget submission path.

use async_trait::async_trait;
use buoywatch_core::{BuoyError, Result};
use buoywatch_relay::{RelayPayload, RelaySink};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

/// A relay sink that records every submission and always succeeds.
///
/// Each submission pushes the payload and signals the notify channel, so
/// tests can await the completion of detached submissions.
#[derive(Debug)]
pub struct RecordingRelay {
    submissions: Mutex<Vec<RelayPayload>>,
    notify: mpsc::UnboundedSender<()>,
}

impl RecordingRelay {
    /// Creates the relay and its completion-notify receiver.
    #[must_use]
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (notify, notify_rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                submissions: Mutex::new(Vec::new()),
                notify,
            }),
            notify_rx,
        )
    }

    /// All payloads submitted so far, in completion order.
    #[must_use]
    pub fn submissions(&self) -> Vec<RelayPayload> {
        self.submissions.lock().clone()
    }
}

#[async_trait]
impl RelaySink for RecordingRelay {
    async fn submit(&self, payload: RelayPayload) -> Result<serde_json::Value> {
        self.submissions.lock().push(payload);
        let _ = self.notify.send(());
        Ok(serde_json::json!({ "status": "logged" }))
    }
}

/// A relay sink that fails every submission with a simulated network
/// error, still recording what was attempted.
#[derive(Debug)]
pub struct FailingRelay {
    attempts: Mutex<Vec<RelayPayload>>,
    notify: mpsc::UnboundedSender<()>,
}

impl FailingRelay {
    /// Creates the relay and its completion-notify receiver.
    #[must_use]
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<()>) {
        let (notify, notify_rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                attempts: Mutex::new(Vec::new()),
                notify,
            }),
            notify_rx,
        )
    }

    /// All payloads whose submission was attempted.
    #[must_use]
    pub fn attempts(&self) -> Vec<RelayPayload> {
        self.attempts.lock().clone()
    }
}

#[async_trait]
impl RelaySink for FailingRelay {
    async fn submit(&self, payload: RelayPayload) -> Result<serde_json::Value> {
        self.attempts.lock().push(payload);
        let _ = self.notify.send(());
        Err(BuoyError::relay("injected network failure"))
    }
}
