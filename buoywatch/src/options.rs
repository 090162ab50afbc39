// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use buoywatch_core::LabelZone;

/// Behavioral options of the live-reading handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Whether each reading sets the connectivity slot to `"Connected"`.
    ///
    /// The two observed dashboard variants differ only in this; the
    /// indicator is static once set and never revised on failure.
    pub show_connectivity_indicator: bool,
    /// Zone the time label is rendered in; `Local` matches the observed
    /// dashboard, `Utc` gives deterministic labels.
    pub label_zone: LabelZone,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            show_connectivity_indicator: true,
            label_zone: LabelZone::Local,
        }
    }
}

impl DashboardOptions {
    /// Returns a copy with the connectivity indicator toggled as given.
    #[must_use]
    pub const fn with_connectivity_indicator(mut self, show: bool) -> Self {
        self.show_connectivity_indicator = show;
        self
    }

    /// Returns a copy rendering time labels in the given zone.
    #[must_use]
    pub const fn with_label_zone(mut self, zone: LabelZone) -> Self {
        self.label_zone = zone;
        self
    }
}
