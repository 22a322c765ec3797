use std::time::Duration;

use httpmock::MockServer;
use tickerdesk::{CacheMode, SectorCatalog, SnapshotBuilder};

use crate::common::{builder_for, chart_body, client_for, mock_chart};

const T0: i64 = 1_717_372_800;

fn catalog() -> SectorCatalog {
    SectorCatalog::empty().sector("Chipmakers", [("Micron", "MU")])
}

#[tokio::test]
async fn snapshot_serves_from_cache_on_second_call() {
    let server = MockServer::start();
    let mock = mock_chart(
        &server,
        "MU",
        chart_body(&[T0, T0 + 86_400], &[Some(100.0), Some(105.0)]),
    );

    let client = builder_for(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();
    assert!(client.cache_enabled());

    let first = SnapshotBuilder::new(&client).catalog(catalog()).fetch().await;
    let second = SnapshotBuilder::new(&client).catalog(catalog()).fetch().await;

    // Served from cache the second time.
    mock.assert_hits(1);
    assert_eq!(first.sectors, second.sectors);
}

#[tokio::test]
async fn refresh_mode_refetches_and_clear_cache_invalidates() {
    let server = MockServer::start();
    let mock = mock_chart(
        &server,
        "MU",
        chart_body(&[T0, T0 + 86_400], &[Some(100.0), Some(105.0)]),
    );

    let client = builder_for(&server)
        .cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap();

    let _ = SnapshotBuilder::new(&client).catalog(catalog()).fetch().await;
    mock.assert_hits(1);

    let _ = SnapshotBuilder::new(&client)
        .catalog(catalog())
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await;
    mock.assert_hits(2);

    // Refresh wrote the new body; a normal call is served from it.
    let _ = SnapshotBuilder::new(&client).catalog(catalog()).fetch().await;
    mock.assert_hits(2);

    client.clear_cache().await;
    let _ = SnapshotBuilder::new(&client).catalog(catalog()).fetch().await;
    mock.assert_hits(3);
}

#[tokio::test]
async fn bypass_and_disabled_cache_always_hit_network() {
    let server = MockServer::start();
    let mock = mock_chart(&server, "MU", chart_body(&[T0], &[Some(100.0)]));

    let cached = builder_for(&server)
        .cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap();
    for _ in 0..2 {
        let _ = SnapshotBuilder::new(&cached)
            .catalog(catalog())
            .cache_mode(CacheMode::Bypass)
            .fetch()
            .await;
    }
    mock.assert_hits(2);

    let uncached = client_for(&server);
    assert!(!uncached.cache_enabled());
    for _ in 0..2 {
        let _ = SnapshotBuilder::new(&uncached).catalog(catalog()).fetch().await;
    }
    mock.assert_hits(4);
}
