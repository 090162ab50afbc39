// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use buoywatch::{Dashboard, DashboardOptions, Feed, FeedStore, LabelZone, Reading};
use buoywatch_test_utils::{
    feed_of, reading_baltic, reading_equator, reading_tropic, ErrorInjectingFeed, RecordingRelay,
};
use futures::stream;

fn utc_options() -> DashboardOptions {
    DashboardOptions::default().with_label_zone(LabelZone::Utc)
}

#[tokio::test]
async fn test_run_drains_a_live_subscription_latest_onward() -> anyhow::Result<()> {
    // Arrange - one historical reading, then a live one
    let store = Arc::new(FeedStore::new());
    store.append(reading_tropic());
    store.append(reading_equator());
    let subscription = store.subscribe().await?;

    let (relay, mut relayed) = RecordingRelay::new();
    let mut dashboard = Dashboard::in_memory(relay.clone(), utc_options());

    store.append(reading_baltic());
    drop(store); // close the feed so run() returns

    // Act
    dashboard.run(subscription).await;
    relayed.recv().await.unwrap();
    relayed.recv().await.unwrap();

    // Assert - newest existing record plus the live append; no replay of
    // the older history. Detached submissions may land in either order.
    let handler = dashboard.handler();
    assert_eq!(handler.map().markers().len(), 2);
    let submissions = relay.submissions();
    assert_eq!(submissions.len(), 2);
    for expected in [reading_equator(), reading_baltic()] {
        assert!(submissions
            .iter()
            .any(|payload| payload.latitude == expected.latitude));
    }

    Ok(())
}

#[tokio::test]
async fn test_feed_error_is_tolerated_and_processing_continues() -> anyhow::Result<()> {
    // Arrange - an error injected between two readings
    let base = stream::iter(vec![reading_tropic(), reading_baltic()]);
    let feed = ErrorInjectingFeed::new(base, 1);

    let (relay, mut relayed) = RecordingRelay::new();
    let mut dashboard = Dashboard::in_memory(relay.clone(), utc_options());

    // Act
    dashboard.run(feed).await;
    relayed.recv().await.unwrap();
    relayed.recv().await.unwrap();

    // Assert - both readings processed, the error merely logged
    let handler = dashboard.handler();
    assert_eq!(handler.map().markers().len(), 2);
    assert_eq!(handler.chart().labels().len(), 2);
    assert_eq!(relay.submissions().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_run_over_finished_feed_processes_everything() -> anyhow::Result<()> {
    // Arrange
    let (relay, mut relayed) = RecordingRelay::new();
    let mut dashboard = Dashboard::in_memory(relay.clone(), utc_options());

    // Act
    dashboard
        .run(feed_of(vec![
            reading_tropic(),
            reading_equator(),
            reading_baltic(),
        ]))
        .await;
    for _ in 0..3 {
        relayed.recv().await.unwrap();
    }

    // Assert - serial processing preserves reading order in the sinks
    let handler = dashboard.handler();
    assert_eq!(
        handler.chart().labels(),
        ["22:13:20", "22:13:21", "22:13:22"]
    );
    assert_eq!(handler.readout().fluorescence, "4.7");

    Ok(())
}

#[tokio::test]
async fn test_display_reflects_the_latest_reading_only() -> anyhow::Result<()> {
    // Arrange
    let (relay, mut relayed) = RecordingRelay::new();
    let mut dashboard = Dashboard::in_memory(relay, utc_options());

    // Act
    dashboard
        .run(feed_of(vec![reading_tropic(), reading_baltic()]))
        .await;
    relayed.recv().await.unwrap();
    relayed.recv().await.unwrap();

    // Assert - slots hold the newest values, markers hold the history
    let handler = dashboard.handler();
    assert_eq!(handler.readout().latitude, "57.5");
    assert_eq!(handler.readout().longitude, "19.5");
    assert_eq!(handler.map().markers().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_subscription_delivers_only_new_maxima_to_running_dashboard() -> anyhow::Result<()> {
    // Arrange
    let store = Arc::new(FeedStore::new());
    let subscription = store.subscribe().await?;

    let (relay, mut relayed) = RecordingRelay::new();
    let mut dashboard = Dashboard::in_memory(relay.clone(), utc_options());

    // Act - a stale-timestamped record arrives after a newer one
    store.append(reading_baltic());
    store.append(reading_tropic()); // older timestamp, stored silently
    store.append(Reading::new(1.0, 2.0, 5.0, reading_baltic().timestamp_ms + 1_000));
    drop(store);

    dashboard.run(subscription).await;
    relayed.recv().await.unwrap();
    relayed.recv().await.unwrap();

    // Assert - the stale record never reached the dashboard
    let submissions = relay.submissions();
    assert_eq!(submissions.len(), 2);
    assert!(submissions
        .iter()
        .all(|payload| payload.latitude != reading_tropic().latitude));
    assert!(submissions.iter().any(|payload| payload.fluorescence == 5.0));

    Ok(())
}
