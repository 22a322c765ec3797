use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::DeskError;

/// A single search hit for one (keyword, country) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The keyword that produced this hit.
    pub keyword: String,
    /// The country the search was localized for, as given by the caller.
    pub country: String,
    /// The provider region code actually used (may be the fallback region).
    pub region: String,
    /// The headline.
    pub title: String,
    /// The publishing outlet, if the provider named one.
    pub source: Option<String>,
    /// Publication time. `None` when the provider's date could not be parsed.
    pub published_at: Option<DateTime<Utc>>,
    /// Link to the article.
    pub url: String,
    /// Provider excerpt of the article body.
    pub summary: String,
    /// Thumbnail URL, if any.
    pub image: Option<String>,
}

/// A (keyword, country) search that failed; the rest of the batch still ran.
#[derive(Debug)]
pub struct PairFailure {
    pub keyword: String,
    pub country: String,
    pub region: String,
    pub error: DeskError,
}

/// Result of a news fetch: the rows that came back plus what went wrong along the way.
#[derive(Debug, Default)]
pub struct NewsBatch {
    /// Hits ordered by country, then keyword, then provider order.
    pub items: Vec<NewsItem>,
    /// One entry per failed search.
    pub failures: Vec<PairFailure>,
    /// Countries with no region mapping that were searched with the fallback region.
    pub fallback_countries: Vec<String>,
}

impl NewsBatch {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no rows came back (possibly because every search failed).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keeps only items published at or after `cutoff`; undated items are dropped.
    pub(crate) fn retain_since(&mut self, cutoff: DateTime<Utc>) {
        self.items
            .retain(|item| item.published_at.is_some_and(|t| t >= cutoff));
    }
}

#[cfg(feature = "dataframe")]
mod frame {
    use polars::prelude::*;

    use super::NewsBatch;
    use crate::core::dataframe::ToDataFrame;

    impl ToDataFrame for NewsBatch {
        fn to_dataframe(&self) -> PolarsResult<DataFrame> {
            let rows = &self.items;
            DataFrame::new(vec![
                Column::new(
                    "keyword".into(),
                    rows.iter().map(|r| r.keyword.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "country".into(),
                    rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "region".into(),
                    rows.iter().map(|r| r.region.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "title".into(),
                    rows.iter().map(|r| r.title.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "source".into(),
                    rows.iter().map(|r| r.source.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "published_at".into(),
                    rows.iter()
                        .map(|r| r.published_at.map(|t| t.timestamp_millis()))
                        .collect::<Vec<_>>(),
                ),
                Column::new(
                    "url".into(),
                    rows.iter().map(|r| r.url.clone()).collect::<Vec<_>>(),
                ),
                Column::new(
                    "summary".into(),
                    rows.iter().map(|r| r.summary.clone()).collect::<Vec<_>>(),
                ),
            ])
        }

        fn schema() -> Vec<(&'static str, DataType)> {
            vec![
                ("keyword", DataType::String),
                ("country", DataType::String),
                ("region", DataType::String),
                ("title", DataType::String),
                ("source", DataType::String),
                ("published_at", DataType::Int64),
                ("url", DataType::String),
                ("summary", DataType::String),
            ]
        }
    }
}
