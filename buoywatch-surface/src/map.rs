// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A point marker placed on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Marker latitude in degrees
    pub latitude: f64,
    /// Marker longitude in degrees
    pub longitude: f64,
    /// Popup text attached to the marker
    pub popup: String,
}

/// The map surface: accepts point markers with a popup.
///
/// Markers are never removed or deduplicated; the surface accumulates
/// one marker per reading for the lifetime of the dashboard, and each
/// newly added marker's popup is opened.
pub trait MapSurface {
    /// Adds a marker at `(latitude, longitude)` and opens its popup.
    fn add_marker(&mut self, latitude: f64, longitude: f64, popup: String);
}

/// In-memory marker layer.
///
/// Tracks which marker's popup is currently open; adding a marker opens
/// its popup and implicitly closes the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    open_popup: Option<usize>,
}

impl MarkerLayer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All markers in insertion order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The marker whose popup is open, if any.
    #[must_use]
    pub fn open_popup(&self) -> Option<&Marker> {
        self.open_popup.and_then(|index| self.markers.get(index))
    }
}

impl MapSurface for MarkerLayer {
    fn add_marker(&mut self, latitude: f64, longitude: f64, popup: String) {
        self.markers.push(Marker {
            latitude,
            longitude,
            popup,
        });
        self.open_popup = Some(self.markers.len() - 1);
    }
}
