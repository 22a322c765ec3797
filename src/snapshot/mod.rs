//! Sector-grouped stock snapshots built from the last two daily closes.

mod model;

pub use model::{SectorQuotes, StockQuote, StockSnapshot, TickerFailure};

use crate::{
    catalog::{Company, SectorCatalog},
    core::{CacheMode, DeskClient, DeskError},
    history::{self, DailyClose, Range},
};

/// Quotes every ticker in the built-in catalog.
///
/// Never fails as a whole; tickers that could not be quoted are listed in
/// [`StockSnapshot::failures`].
pub async fn get_stock_data(client: &DeskClient) -> StockSnapshot {
    SnapshotBuilder::new(client).fetch().await
}

/// A builder for a catalog-wide stock snapshot.
pub struct SnapshotBuilder {
    client: DeskClient,
    catalog: SectorCatalog,
    range: Range,
    cache_mode: CacheMode,
}

impl SnapshotBuilder {
    /// Creates a builder over the built-in [`SectorCatalog`].
    pub fn new(client: &DeskClient) -> Self {
        Self {
            client: client.clone(),
            catalog: SectorCatalog::default(),
            range: Range::default(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Quotes this catalog instead of the built-in one.
    #[must_use]
    pub fn catalog(mut self, catalog: SectorCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// History range requested per ticker. Only the last two closes are used. Default: 5 days.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the cache mode for this specific call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Fetches every ticker, one at a time, in catalog order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(tickers = self.catalog.len()))
    )]
    pub async fn fetch(self) -> StockSnapshot {
        let mut snapshot = StockSnapshot::default();

        for sector in self.catalog.sectors() {
            let mut quotes = Vec::with_capacity(sector.companies.len());

            for company in &sector.companies {
                match self.quote_one(company).await {
                    Ok(q) => quotes.push(q),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            sector = %sector.name,
                            ticker = %company.ticker,
                            error = %error,
                            "skipping ticker"
                        );
                        snapshot.failures.push(TickerFailure {
                            sector: sector.name.clone(),
                            company: company.name.clone(),
                            ticker: company.ticker.clone(),
                            error,
                        });
                    }
                }
            }

            snapshot.sectors.push(SectorQuotes {
                sector: sector.name.clone(),
                quotes,
            });
        }

        snapshot
    }

    async fn quote_one(&self, company: &Company) -> Result<StockQuote, DeskError> {
        let closes =
            history::fetch_daily_closes(&self.client, &company.ticker, self.range, self.cache_mode)
                .await?;
        quote_from_closes(company, &closes).ok_or_else(|| DeskError::EmptyHistory {
            ticker: company.ticker.clone(),
        })
    }
}

/// Derives a quote from the last two closes; `None` when there are none.
fn quote_from_closes(company: &Company, closes: &[DailyClose]) -> Option<StockQuote> {
    let (latest, rest) = closes.split_last()?;
    let previous = rest.last().map_or(latest.close, |c| c.close);

    let change = latest.close - previous;
    let pct_change = if previous == 0.0 {
        0.0
    } else {
        change / previous * 100.0
    };

    Some(StockQuote {
        name: company.name.clone(),
        ticker: company.ticker.clone(),
        price: latest.close,
        change,
        pct_change,
    })
}
