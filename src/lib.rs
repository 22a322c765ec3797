//! tickerdesk-rs: the data layer behind a small market dashboard.
//!
//! Two independent fetchers share one [`DeskClient`]:
//!
//! - [`news`]: searches a news aggregator for every (keyword, country) pair and returns the
//!   hits as one ordered table, optionally cut to a 3- or 6-month window.
//! - [`snapshot`]: quotes every ticker of a [`SectorCatalog`] from its last two daily closes
//!   and groups the quotes by sector.
//!
//! Both are batch calls with per-item isolation: one failing search or ticker is recorded
//! next to the results and never aborts the rest.
//!
//! ```no_run
//! use tickerdesk::{DeskClient, TimeWindow, fetch_news, get_stock_data};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DeskClient::builder().build()?;
//!
//! let news = fetch_news(&client, ["semiconductor"], ["Korea", "Japan"], TimeWindow::ThreeMonths).await?;
//! println!("{} articles, {} failed searches", news.len(), news.failures.len());
//!
//! let snap = get_stock_data(&client).await;
//! for sector in &snap.sectors {
//!     for q in &sector.quotes {
//!         println!("{:<16} {:>8} {:>10.2} {:>+7.2}%", sector.sector, q.ticker, q.price, q.pct_change);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod core;
pub mod history;
pub mod news;
pub mod snapshot;

pub use catalog::{CountryRegionMap, SectorCatalog};
pub use crate::core::{CacheMode, DeskClient, DeskClientBuilder, DeskError};
pub use news::{NewsBatch, NewsBuilder, NewsItem, PairFailure, SafeSearch, TimeWindow, fetch_news};
pub use snapshot::{
    SectorQuotes, SnapshotBuilder, StockQuote, StockSnapshot, TickerFailure, get_stock_data,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
