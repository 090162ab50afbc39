// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use buoywatch_surface::{
    ChartSurface, FluorescenceSeries, MapSurface, MarkerLayer, Readout, TextReadout,
};

#[test]
fn test_markers_accumulate_and_are_never_deduplicated() {
    // Arrange
    let mut layer = MarkerLayer::new();

    // Act - the same position twice
    layer.add_marker(10.5, -20.25, "Fluorescence: 3.2".to_string());
    layer.add_marker(10.5, -20.25, "Fluorescence: 3.2".to_string());

    // Assert
    assert_eq!(layer.markers().len(), 2);
    assert_eq!(layer.markers()[0], layer.markers()[1]);
}

#[test]
fn test_adding_a_marker_opens_its_popup() {
    // Arrange
    let mut layer = MarkerLayer::new();
    assert!(layer.open_popup().is_none());

    // Act
    layer.add_marker(1.0, 2.0, "Fluorescence: 0.5".to_string());
    layer.add_marker(3.0, 4.0, "Fluorescence: 0.7".to_string());

    // Assert - the newest popup is the open one
    let open = layer.open_popup().unwrap();
    assert_eq!(open.latitude, 3.0);
    assert_eq!(open.popup, "Fluorescence: 0.7");
}

#[test]
fn test_readout_retains_last_written_text_per_slot() {
    // Arrange
    let mut readout = TextReadout::new();
    assert!(readout.status.is_none());

    // Act
    readout.set_latitude("10.5".to_string());
    readout.set_longitude("-20.25".to_string());
    readout.set_fluorescence("3.2".to_string());
    readout.set_fluorescence("3.4".to_string());
    readout.set_status("Connected".to_string());

    // Assert
    assert_eq!(readout.latitude, "10.5");
    assert_eq!(readout.longitude, "-20.25");
    assert_eq!(readout.fluorescence, "3.4");
    assert_eq!(readout.status.as_deref(), Some("Connected"));
}

#[test]
fn test_readout_stores_non_finite_renderings_verbatim() {
    // Malformed readings reach the display unfiltered
    let mut readout = TextReadout::new();
    readout.set_latitude(f64::NAN.to_string());

    assert_eq!(readout.latitude, "NaN");
}

#[test]
fn test_series_keeps_name_and_counts_redraws() {
    let mut series = FluorescenceSeries::default();
    assert_eq!(series.name(), "Chlorophyll Fluorescence");
    assert_eq!(series.redraws(), 0);

    assert!(series.append_point("09:00:00", 2.0));
    assert!(!series.append_point("09:00:00", 2.1));
    assert!(series.append_point("09:00:01", 2.2));

    assert_eq!(series.redraws(), 2);
    assert_eq!(series.values(), [2.0, 2.2]);
}
