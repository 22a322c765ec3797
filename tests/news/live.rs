use tickerdesk::{DeskClient, TimeWindow, fetch_news};

#[tokio::test]
#[ignore]
async fn live_news_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = DeskClient::builder().build().unwrap();

    // Records `tests/fixtures/news_semiconductor.json` if TD_RECORD=1 (with `test-mode`).
    let batch = fetch_news(&client, ["semiconductor"], ["Korea", "USA"], TimeWindow::OneMonth)
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(
            batch.failures.len() < 2,
            "both searches failed: {:?}",
            batch.failures
        );
        for item in &batch.items {
            assert_eq!(item.keyword, "semiconductor");
            assert!(!item.title.is_empty());
        }
    }
}
