use httpmock::{Method::GET, MockServer};
use tickerdesk::{SectorCatalog, SnapshotBuilder, history::Range};

use crate::common::{chart_body, client_for, mock_chart};

const DAY: i64 = 86_400;
const T0: i64 = 1_717_372_800; // 2024-06-03

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn two_sessions_give_change_and_percent() {
    let server = MockServer::start();
    let mu = mock_chart(
        &server,
        "MU",
        chart_body(&[T0, T0 + DAY], &[Some(100.0), Some(105.0)]),
    );

    let catalog = SectorCatalog::empty().sector("Chipmakers", [("Micron", "MU")]);
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client).catalog(catalog).fetch().await;

    mu.assert();
    assert!(snap.failures.is_empty());

    let quotes = snap.sector("Chipmakers").unwrap();
    assert_eq!(quotes.len(), 1);
    let q = &quotes[0];
    assert_eq!(q.name, "Micron");
    assert_eq!(q.ticker, "MU");
    assert!(approx(q.price, 105.0));
    assert!(approx(q.change, 5.0));
    assert!(approx(q.pct_change, 5.0));
}

#[tokio::test]
async fn single_session_has_zero_change() {
    let server = MockServer::start();
    let _m = mock_chart(&server, "NVDA", chart_body(&[T0], &[Some(120.5)]));

    let catalog = SectorCatalog::empty().sector("Chip Designers", [("NVIDIA", "NVDA")]);
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client).catalog(catalog).fetch().await;

    let q = &snap.sector("Chip Designers").unwrap()[0];
    assert!(approx(q.price, 120.5));
    assert_eq!(q.change, 0.0);
    assert_eq!(q.pct_change, 0.0);
}

#[tokio::test]
async fn only_the_last_two_non_null_closes_count() {
    let server = MockServer::start();
    let _a = mock_chart(
        &server,
        "AMAT",
        chart_body(
            &[T0, T0 + DAY, T0 + 2 * DAY, T0 + 3 * DAY, T0 + 4 * DAY],
            &[Some(90.0), Some(95.0), None, Some(100.0), Some(110.0)],
        ),
    );
    let _b = mock_chart(
        &server,
        "LRCX",
        chart_body(&[T0, T0 + DAY, T0 + 2 * DAY], &[Some(100.0), Some(96.0), None]),
    );

    let catalog = SectorCatalog::empty().sector(
        "Equipment",
        [("Applied Materials", "AMAT"), ("Lam Research", "LRCX")],
    );
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client).catalog(catalog).fetch().await;

    let quotes = snap.sector("Equipment").unwrap();
    assert!(approx(quotes[0].price, 110.0));
    assert!(approx(quotes[0].change, 10.0));
    assert!(approx(quotes[0].pct_change, 10.0));

    assert!(approx(quotes[1].price, 96.0));
    assert!(approx(quotes[1].change, -4.0));
    assert!(approx(quotes[1].pct_change, -4.0));
}

#[tokio::test]
async fn sectors_and_companies_keep_catalog_order() {
    let server = MockServer::start();
    let _mocks: Vec<_> = ["TSM", "INTC", "QCOM"]
        .into_iter()
        .map(|sym| {
            mock_chart(
                &server,
                sym,
                chart_body(&[T0, T0 + DAY], &[Some(10.0), Some(11.0)]),
            )
        })
        .collect();

    let catalog = SectorCatalog::empty()
        .sector("Chipmakers", [("TSMC", "TSM"), ("Intel", "INTC")])
        .sector("Chip Designers", [("Qualcomm", "QCOM")]);
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client)
        .catalog(catalog.clone())
        .fetch()
        .await;

    let names: Vec<&str> = snap.sector_names().collect();
    assert_eq!(names, vec!["Chipmakers", "Chip Designers"]);

    let tickers: Vec<&str> = snap.quotes().map(|q| q.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["TSM", "INTC", "QCOM"]);
    assert!(tickers.iter().all(|t| catalog.contains_ticker(t)));
}

#[tokio::test]
async fn chart_request_uses_daily_interval_and_range() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/005930.KS")
            .query_param("range", "1mo")
            .query_param("interval", "1d")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(&[T0, T0 + DAY], &[Some(70_000.0), Some(71_400.0)]));
    });

    let catalog = SectorCatalog::empty().sector("Chipmakers", [("Samsung Electronics", "005930.KS")]);
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client)
        .catalog(catalog)
        .range(Range::M1)
        .fetch()
        .await;

    mock.assert();
    let q = &snap.sector("Chipmakers").unwrap()[0];
    assert!(approx(q.change, 1_400.0));
    assert!(approx(q.pct_change, 2.0));
}

#[tokio::test]
async fn first_chart_result_is_used() {
    let server = MockServer::start();
    let body = serde_json::json!({
        "chart": {
            "result": [
                {
                    "timestamp": [T0, T0 + DAY],
                    "indicators": { "quote": [{ "close": [50.0, 55.0] }] }
                },
                {
                    "timestamp": [T0, T0 + DAY],
                    "indicators": { "quote": [{ "close": [900.0, 1.0] }] }
                }
            ],
            "error": null
        }
    })
    .to_string();
    let _amat = mock_chart(&server, "AMAT", body);

    let catalog = SectorCatalog::empty().sector("Equipment", [("Applied Materials", "AMAT")]);
    let client = client_for(&server);
    let snap = SnapshotBuilder::new(&client).catalog(catalog).fetch().await;

    assert!(snap.failures.is_empty());
    let q = &snap.sector("Equipment").unwrap()[0];
    assert!(approx(q.price, 55.0));
    assert!(approx(q.change, 5.0));
}
