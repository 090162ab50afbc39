// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The chart surface: appends categorical (label, value) points to a
/// named series.
///
/// Labels are unique in insertion order. Appending a point under an
/// already-present label suppresses the append and the redraw; the value
/// is neither merged nor overwritten.
pub trait ChartSurface {
    /// Appends a point and requests a redraw when the label is new.
    ///
    /// Returns `true` when the point was added as new, `false` when the
    /// label was already present and the append was suppressed.
    fn append_point(&mut self, label: &str, value: f64) -> bool;
}

/// In-memory categorical series of fluorescence values.
///
/// Membership is a linear scan over all previously seen labels; O(n) per
/// event is acceptable at the feed's rate. Redraw requests are counted
/// in place of an actual repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct FluorescenceSeries {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
    redraws: u64,
}

impl FluorescenceSeries {
    /// Creates an empty series with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            values: Vec::new(),
            redraws: 0,
        }
    }

    /// The series display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Values aligned with [`labels`](Self::labels).
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl Default for FluorescenceSeries {
    fn default() -> Self {
        Self::new("Chlorophyll Fluorescence")
    }
}

impl ChartSurface for FluorescenceSeries {
    fn append_point(&mut self, label: &str, value: f64) -> bool {
        if self.labels.iter().any(|seen| seen == label) {
            tracing::debug!(label, "duplicate label, chart append suppressed");
            return false;
        }

        self.labels.push(label.to_string());
        self.values.push(value);
        self.redraws += 1;
        true
    }
}
