// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use buoywatch_core::{FeedItem, Reading};
use buoywatch_feed::{Feed, FeedStore};
use buoywatch_test_utils::{
    assert_no_item_emitted, reading_baltic, reading_equator, reading_tropic,
};
use futures::StreamExt;

#[tokio::test]
async fn test_subscribe_to_empty_store_emits_nothing_until_append() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    let mut subscription = store.subscribe().await?;

    // Act & Assert - nothing existing, nothing delivered
    assert_no_item_emitted(&mut subscription, 10).await;

    store.append(reading_tropic());
    let delivered = subscription.next().await.unwrap();
    assert_eq!(delivered, FeedItem::Value(reading_tropic()));

    Ok(())
}

#[tokio::test]
async fn test_subscribe_delivers_only_the_newest_existing_record() -> anyhow::Result<()> {
    // Arrange - three records already in the store
    let store = FeedStore::new();
    store.append(reading_tropic());
    store.append(reading_equator());
    store.append(reading_baltic());

    // Act
    let mut subscription = store.subscribe().await?;

    // Assert - only the newest is replayed, history is not
    let first = subscription.next().await.unwrap();
    assert_eq!(first, FeedItem::Value(reading_baltic()));
    assert_no_item_emitted(&mut subscription, 10).await;

    Ok(())
}

#[tokio::test]
async fn test_stale_timestamped_append_is_stored_but_not_delivered() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    store.append(reading_baltic()); // newest timestamp
    let mut subscription = store.subscribe().await?;
    assert_eq!(
        subscription.next().await.unwrap(),
        FeedItem::Value(reading_baltic())
    );

    // Act - append a record whose timestamp falls behind the maximum
    store.append(reading_tropic());

    // Assert - inserted in order, but no fan-out
    assert_eq!(store.len(), 2);
    assert_eq!(store.latest(), Some(reading_baltic()));
    assert_no_item_emitted(&mut subscription, 10).await;

    Ok(())
}

#[tokio::test]
async fn test_equal_timestamp_append_counts_as_newest() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    store.append(reading_tropic());
    let mut subscription = store.subscribe().await?;
    subscription.next().await.unwrap();

    // Act - same timestamp as the current maximum
    let twin = Reading::new(11.0, -21.0, 2.0, reading_tropic().timestamp_ms);
    store.append(twin);

    // Assert
    assert_eq!(subscription.next().await.unwrap(), FeedItem::Value(twin));

    Ok(())
}

#[tokio::test]
async fn test_every_subscriber_sees_each_new_maximum() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    let mut first = store.subscribe().await?;
    let mut second = store.subscribe().await?;

    // Act
    store.append(reading_tropic());
    store.append(reading_equator());

    // Assert
    for subscription in [&mut first, &mut second] {
        assert_eq!(
            subscription.next().await.unwrap(),
            FeedItem::Value(reading_tropic())
        );
        assert_eq!(
            subscription.next().await.unwrap(),
            FeedItem::Value(reading_equator())
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_feed_error_is_in_band_and_not_fatal() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    let mut subscription = store.subscribe().await?;

    // Act
    store.fail("connection reset by peer");
    store.append(reading_tropic());

    // Assert - the error arrives in-band, the subscription stays live
    assert!(subscription.next().await.unwrap().is_error());
    assert_eq!(
        subscription.next().await.unwrap(),
        FeedItem::Value(reading_tropic())
    );

    Ok(())
}

#[tokio::test]
async fn test_dropped_subscription_is_pruned_on_next_fanout() -> anyhow::Result<()> {
    // Arrange
    let store = FeedStore::new();
    let subscription = store.subscribe().await?;
    let _kept = store.subscribe().await?;
    assert_eq!(store.subscriber_count(), 2);

    // Act
    drop(subscription);
    store.append(reading_tropic());

    // Assert
    assert_eq!(store.subscriber_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_store_accessors_reflect_ordering() -> anyhow::Result<()> {
    let store = FeedStore::new();
    assert!(store.is_empty());

    // Appended out of timestamp order
    store.append(reading_baltic());
    store.append(reading_tropic());

    assert_eq!(store.len(), 2);
    assert_eq!(store.latest(), Some(reading_baltic()));

    Ok(())
}
