// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fire-and-forget relay of buoy readings to an HTTP logging endpoint.
//!
//! Every reading the handler processes is POSTed as JSON to a configured
//! endpoint (an order-insensitive, spreadsheet-style log sink). The
//! submission is detached: a slow or failed relay call never blocks the
//! dashboard, and failures are logged and suppressed with no retry.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod config;
pub mod detached;
pub mod http;
pub mod payload;
pub mod sink;

pub use self::config::RelayConfig;
pub use self::detached::submit_detached;
pub use self::http::HttpRelay;
pub use self::payload::RelayPayload;
pub use self::sink::RelaySink;
