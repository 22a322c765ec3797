//! Same data as `dashboard`, rendered through polars.

use tickerdesk::{DeskClient, SnapshotBuilder, TimeWindow, ToDataFrame, fetch_news};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DeskClient::builder().build()?;

    let news = fetch_news(&client, ["semiconductor"], ["Korea", "Taiwan"], TimeWindow::ThreeMonths).await?;
    println!("{}", news.to_dataframe()?);

    let snap = SnapshotBuilder::new(&client).fetch().await;
    println!("{}", snap.to_dataframe()?);

    Ok(())
}
