// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::{BuoyError, Result};
use serde::Deserialize;
use std::env;

/// Default feed topic holding the buoy readings.
pub const DEFAULT_TOPIC: &str = "buoy_data";

/// Connection parameters for a hosted realtime feed.
///
/// Credentials are configuration, never hardcoded: they come from the
/// environment (or any deserializable source) at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// API key of the realtime database project
    pub api_key: String,
    /// Project identifier
    pub project_id: String,
    /// Base URL of the realtime database
    pub database_url: String,
    /// Topic (path) under which readings are appended
    #[serde(default = "default_topic")]
    pub topic: String,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

impl FeedConfig {
    /// Loads the configuration from `BUOYWATCH_*` environment variables.
    ///
    /// `BUOYWATCH_API_KEY`, `BUOYWATCH_PROJECT_ID` and
    /// `BUOYWATCH_DATABASE_URL` are required; `BUOYWATCH_FEED_TOPIC`
    /// defaults to `buoy_data`.
    ///
    /// # Errors
    /// Returns `Err(BuoyError::Config)` naming the first missing variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_var("BUOYWATCH_API_KEY")?,
            project_id: require_var("BUOYWATCH_PROJECT_ID")?,
            database_url: require_var("BUOYWATCH_DATABASE_URL")?,
            topic: env::var("BUOYWATCH_FEED_TOPIC").unwrap_or_else(|_| default_topic()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| BuoyError::config(format!("missing environment variable {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_credentials_and_defaults_topic() {
        env::set_var("BUOYWATCH_API_KEY", "key");
        env::set_var("BUOYWATCH_PROJECT_ID", "chl-a-buoy");
        env::set_var("BUOYWATCH_DATABASE_URL", "https://example.test/rtdb");
        env::remove_var("BUOYWATCH_FEED_TOPIC");

        let config = FeedConfig::from_env().unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.project_id, "chl-a-buoy");
        assert_eq!(config.database_url, "https://example.test/rtdb");
        assert_eq!(config.topic, DEFAULT_TOPIC);

        env::remove_var("BUOYWATCH_API_KEY");
        env::remove_var("BUOYWATCH_PROJECT_ID");
        env::remove_var("BUOYWATCH_DATABASE_URL");
    }

    #[test]
    fn missing_credential_is_a_config_error() {
        env::remove_var("BUOYWATCH_NOPE");
        let err = require_var("BUOYWATCH_NOPE").unwrap_err();
        assert!(matches!(err, BuoyError::Config { .. }));
    }
}
