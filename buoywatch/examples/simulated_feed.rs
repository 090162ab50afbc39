// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runs the dashboard against a simulated buoy feed.
//!
//! A producer task appends one drifting reading per second to an
//! in-process feed store; the dashboard drains the subscription and
//! relays every reading. Set `BUOYWATCH_RELAY_URL` to POST to a real
//! logging endpoint; without it a recording double stands in.

use std::sync::Arc;
use std::time::Duration;

use buoywatch::{Dashboard, DashboardOptions, Feed, FeedStore, HttpRelay, Reading, RelayConfig, RelaySink};
use buoywatch_test_utils::RecordingRelay;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let relay: Arc<dyn RelaySink> = match RelayConfig::from_env() {
        Ok(config) => {
            info!(url = %config.endpoint_url, "relaying to configured endpoint");
            Arc::new(HttpRelay::new(config))
        }
        Err(_) => {
            info!("BUOYWATCH_RELAY_URL unset, recording submissions locally");
            let (relay, _notify) = RecordingRelay::new();
            relay
        }
    };

    let store = Arc::new(FeedStore::new());
    let subscription = store.subscribe().await?;

    let producer = tokio::spawn({
        let store = Arc::clone(&store);
        async move {
            for tick in 0..10i64 {
                let reading = Reading::new(
                    10.5 + 0.01 * tick as f64,
                    -20.25 - 0.01 * tick as f64,
                    3.2 + 0.1 * tick as f64,
                    now_millis(),
                );
                info!(%reading, "buoy reports");
                store.append(reading);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    });
    drop(store); // the producer owns the last handle; the feed ends with it

    let mut dashboard = Dashboard::in_memory(relay, DashboardOptions::default());
    dashboard.run(subscription).await;
    producer.await?;

    let handler = dashboard.handler();
    info!(
        markers = handler.map().markers().len(),
        chart_points = handler.chart().labels().len(),
        latest_fluorescence = %handler.readout().fluorescence,
        "dashboard session finished"
    );

    Ok(())
}
