use serde::Serialize;

use crate::DeskError;

/// Latest close and its move against the prior session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    /// Company name from the catalog.
    pub name: String,
    /// Ticker symbol from the catalog.
    pub ticker: String,
    /// Latest close.
    pub price: f64,
    /// `price` minus the previous close; 0 when only one session came back.
    pub change: f64,
    /// `change` as a percentage of the previous close.
    pub pct_change: f64,
}

/// Quotes for one sector, in catalog order. Failed tickers are absent, not null-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorQuotes {
    pub sector: String,
    pub quotes: Vec<StockQuote>,
}

/// A ticker that could not be quoted; the rest of the snapshot still ran.
#[derive(Debug)]
pub struct TickerFailure {
    pub sector: String,
    pub company: String,
    pub ticker: String,
    pub error: DeskError,
}

/// Sector-grouped quotes for a whole catalog.
///
/// Every catalog sector has an entry, even when all of its tickers failed.
#[derive(Debug, Default)]
pub struct StockSnapshot {
    pub sectors: Vec<SectorQuotes>,
    pub failures: Vec<TickerFailure>,
}

impl StockSnapshot {
    /// Quotes for `sector`, or `None` if the catalog has no such sector.
    pub fn sector(&self, sector: &str) -> Option<&[StockQuote]> {
        self.sectors
            .iter()
            .find(|s| s.sector == sector)
            .map(|s| s.quotes.as_slice())
    }

    /// Sector labels in catalog order.
    pub fn sector_names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.sector.as_str())
    }

    /// All quotes, sector by sector.
    pub fn quotes(&self) -> impl Iterator<Item = &StockQuote> {
        self.sectors.iter().flat_map(|s| &s.quotes)
    }
}

#[cfg(feature = "dataframe")]
mod frame {
    use polars::prelude::*;

    use super::StockSnapshot;
    use crate::core::dataframe::ToDataFrame;

    impl ToDataFrame for StockSnapshot {
        fn to_dataframe(&self) -> PolarsResult<DataFrame> {
            let mut sector = Vec::new();
            let mut name = Vec::new();
            let mut ticker = Vec::new();
            let mut price = Vec::new();
            let mut change = Vec::new();
            let mut pct_change = Vec::new();

            for s in &self.sectors {
                for q in &s.quotes {
                    sector.push(s.sector.clone());
                    name.push(q.name.clone());
                    ticker.push(q.ticker.clone());
                    price.push(q.price);
                    change.push(q.change);
                    pct_change.push(q.pct_change);
                }
            }

            DataFrame::new(vec![
                Column::new("sector".into(), sector),
                Column::new("name".into(), name),
                Column::new("ticker".into(), ticker),
                Column::new("price".into(), price),
                Column::new("change".into(), change),
                Column::new("pct_change".into(), pct_change),
            ])
        }

        fn schema() -> Vec<(&'static str, DataType)> {
            vec![
                ("sector", DataType::String),
                ("name", DataType::String),
                ("ticker", DataType::String),
                ("price", DataType::Float64),
                ("change", DataType::Float64),
                ("pct_change", DataType::Float64),
            ]
        }
    }
}
