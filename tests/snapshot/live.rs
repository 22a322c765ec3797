use tickerdesk::{DeskClient, SectorCatalog, get_stock_data};

#[tokio::test]
#[ignore]
async fn live_snapshot_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = DeskClient::builder().build().unwrap();
    let snap = get_stock_data(&client).await;

    if !crate::common::is_recording() {
        let catalog = SectorCatalog::default();
        assert_eq!(snap.sectors.len(), catalog.sectors().len());
        assert!(snap.quotes().count() > 0, "failures: {:?}", snap.failures);
        for q in snap.quotes() {
            assert!(catalog.contains_ticker(&q.ticker));
            assert!(q.price > 0.0);
        }
    }
}
