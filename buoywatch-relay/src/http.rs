// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use buoywatch_core::{BuoyError, Result};

use crate::config::RelayConfig;
use crate::payload::RelayPayload;
use crate::sink::RelaySink;

/// HTTP implementation of [`RelaySink`].
///
/// POSTs the payload as JSON (`Content-Type: application/json`) to the
/// configured endpoint and parses the response body as JSON. Any failure
/// surfaces as a single [`BuoyError`]; the caller decides to log and
/// drop it.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpRelay {
    /// Creates a relay for the configured endpoint with a default client.
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a relay reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: RelayConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url,
        }
    }

    /// The endpoint URL submissions go to.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl RelaySink for HttpRelay {
    async fn submit(&self, payload: RelayPayload) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BuoyError::relay_source("submitting to logging endpoint", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BuoyError::RelayStatus {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| BuoyError::relay_source("decoding logging endpoint response", e))
    }
}
