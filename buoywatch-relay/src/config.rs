// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::{BuoyError, Result};
use serde::Deserialize;
use std::env;

/// Configuration of the logging endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayConfig {
    /// URL the JSON payloads are POSTed to
    pub endpoint_url: String,
}

impl RelayConfig {
    /// Creates a configuration for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Loads the endpoint URL from `BUOYWATCH_RELAY_URL`.
    ///
    /// # Errors
    /// Returns `Err(BuoyError::Config)` when the variable is unset.
    pub fn from_env() -> Result<Self> {
        env::var("BUOYWATCH_RELAY_URL")
            .map(Self::new)
            .map_err(|_| BuoyError::config("missing environment variable BUOYWATCH_RELAY_URL"))
    }
}
