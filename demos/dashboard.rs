//! Prints the two dashboard tables to stdout.
//!
//! Usage: `cargo run --example dashboard -- [window] [keyword...]`
//! e.g. `cargo run --example dashboard --features tracing-subscriber -- 3m semiconductor hbm`

use tickerdesk::{DeskClient, NewsBuilder, TimeWindow, get_stock_data};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let window = args.next().map_or(TimeWindow::OneMonth, |w| TimeWindow::parse(&w));
    let mut keywords: Vec<String> = args.collect();
    if keywords.is_empty() {
        keywords.push("semiconductor".into());
    }

    let client = DeskClient::builder().build()?;

    let news = NewsBuilder::new(&client)
        .keywords(keywords)
        .countries(["Korea", "USA", "Japan"])
        .window(window)
        .fetch()
        .await?;

    println!("--- News ({window:?}) ---");
    for item in &news.items {
        let date = item
            .published_at
            .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d").to_string());
        println!(
            "{:<8} {:<14} {:<10} {}  [{}]",
            item.country,
            item.keyword,
            date,
            item.title,
            item.source.as_deref().unwrap_or("?")
        );
    }
    for f in &news.failures {
        println!("! {} / {}: {}", f.country, f.keyword, f.error);
    }

    let snap = get_stock_data(&client).await;
    for sector in &snap.sectors {
        println!("\n--- {} ---", sector.sector);
        for q in &sector.quotes {
            println!(
                "{:<22} {:>10} {:>12.2} {:>+10.2} {:>+7.2}%",
                q.name, q.ticker, q.price, q.change, q.pct_change
            );
        }
    }
    if !snap.failures.is_empty() {
        println!("\n{} ticker(s) unavailable", snap.failures.len());
    }

    Ok(())
}
