// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::reading::Reading;

/// A minimal trait for types that carry an intrinsic timestamp.
///
/// The feed stores and delivers records ordered by this value; it is
/// read-only on purpose, as nothing in the pipeline rewrites timestamps.
///
/// # Examples
///
/// ```
/// use buoywatch_core::HasTimestamp;
///
/// #[derive(Clone, Debug)]
/// struct Event {
///     data: String,
///     time: u64,
/// }
///
/// impl HasTimestamp for Event {
///     type Timestamp = u64;
///
///     fn timestamp(&self) -> u64 {
///         self.time
///     }
/// }
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp value for this item.
    /// The feed uses this to determine the order of records.
    fn timestamp(&self) -> Self::Timestamp;
}

impl HasTimestamp for Reading {
    type Timestamp = i64;

    fn timestamp(&self) -> i64 {
        self.timestamp_ms
    }
}
