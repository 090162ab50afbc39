// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the buoywatch telemetry pipeline.
//!
//! A single root [`BuoyError`] covers the failure modes of the pipeline's
//! collaborators: the feed subscription, the relay endpoint, and the
//! configuration surface. Relay failures are always logged and suppressed
//! by the handler, never retried.

/// Root error type for all buoywatch operations.
#[derive(Debug, thiserror::Error)]
pub enum BuoyError {
    /// The feed subscription failed or delivered an in-band error.
    ///
    /// Feed errors are not handled by the live-reading handler beyond
    /// logging; the subscription itself stays open.
    #[error("Feed error: {context}")]
    Feed {
        /// Description of what went wrong on the feed side
        context: String,
    },

    /// The relay submission failed.
    ///
    /// Covers connect errors, non-success endpoint statuses and
    /// unparseable response bodies alike; the caller logs and moves on.
    #[error("Relay error: {context}")]
    Relay {
        /// Description of the relay failure
        context: String,
        /// Underlying transport or decode error, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The relay endpoint answered with a non-success status.
    #[error("Relay endpoint returned status {status}")]
    RelayStatus {
        /// HTTP status code returned by the endpoint
        status: u16,
    },

    /// A required configuration value is missing or malformed.
    #[error("Configuration error: {context}")]
    Config {
        /// Which configuration value failed, and how
        context: String,
    },
}

impl BuoyError {
    /// Create a feed error with the given context.
    pub fn feed(context: impl Into<String>) -> Self {
        Self::Feed {
            context: context.into(),
        }
    }

    /// Create a relay error with the given context and no source.
    pub fn relay(context: impl Into<String>) -> Self {
        Self::Relay {
            context: context.into(),
            source: None,
        }
    }

    /// Wrap a transport or decode error from the relay client.
    pub fn relay_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Relay {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with the given context.
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }
}

/// Specialized Result type for buoywatch operations.
pub type Result<T> = std::result::Result<T, BuoyError>;

impl Clone for BuoyError {
    fn clone(&self) -> Self {
        match self {
            Self::Feed { context } => Self::Feed {
                context: context.clone(),
            },
            // The boxed source is not cloneable; fold it into the context
            Self::Relay { context, source } => Self::Relay {
                context: match source {
                    Some(source) => format!("{context}: {source}"),
                    None => context.clone(),
                },
                source: None,
            },
            Self::RelayStatus { status } => Self::RelayStatus { status: *status },
            Self::Config { context } => Self::Config {
                context: context.clone(),
            },
        }
    }
}
