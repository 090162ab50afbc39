// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::Reading;

/// A well-formed tropical-Atlantic reading.
///
/// Its timestamp renders as `22:13:20` UTC.
#[must_use]
pub fn reading_tropic() -> Reading {
    Reading::new(10.5, -20.25, 3.2, 1_700_000_000_000)
}

/// A reading at the null island position, one second after
/// [`reading_tropic`].
#[must_use]
pub fn reading_equator() -> Reading {
    Reading::new(0.0, 0.0, 1.0, 1_700_000_001_000)
}

/// A Baltic-sea reading, two seconds after [`reading_tropic`].
#[must_use]
pub fn reading_baltic() -> Reading {
    Reading::new(57.5, 19.5, 4.7, 1_700_000_002_000)
}

/// A malformed reading with every numeric field missing upstream.
#[must_use]
pub fn reading_malformed() -> Reading {
    Reading::new(f64::NAN, f64::NAN, f64::NAN, 1_700_000_003_000)
}
