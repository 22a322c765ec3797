//! Keyword × country news search.
//!
//! One provider search runs per (country, keyword) pair, strictly one after another.
//! A failing pair is recorded in [`NewsBatch::failures`] and the remaining pairs still run.

mod api;
mod date;
mod model;
mod wire;

pub use date::parse_published;
pub use model::{NewsBatch, NewsItem, PairFailure};

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::{
    catalog::CountryRegionMap,
    core::{CacheMode, DeskClient, DeskError},
};

/// Default number of hits requested per (keyword, country) pair.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// How far back a news search should reach.
///
/// The provider only knows day/week/month/year buckets. `ThreeMonths` and `SixMonths`
/// therefore ask for the year bucket and cut the result locally; items whose publish date
/// is missing or unparseable are dropped by that cut. `OneMonth` and `Custom` use the month
/// bucket as-is and never drop items for their date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    /// Any window the selector did not recognize; behaves like the raw month bucket.
    Custom,
}

impl TimeWindow {
    /// Lenient parse of a UI selector value (`"1m"`, `"3 months"`, `"6mo"`, ...).
    /// Unrecognized values become [`TimeWindow::Custom`].
    pub fn parse(s: &str) -> Self {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "1m" | "1mo" | "1month" | "1months" | "month" => Self::OneMonth,
            "3m" | "3mo" | "3month" | "3months" => Self::ThreeMonths,
            "6m" | "6mo" | "6month" | "6months" => Self::SixMonths,
            _ => Self::Custom,
        }
    }

    /// The provider's time-range bucket for this window.
    pub const fn range_bucket(self) -> &'static str {
        match self {
            Self::OneMonth | Self::Custom => "m",
            Self::ThreeMonths | Self::SixMonths => "y",
        }
    }

    /// Days kept by the local post-filter, if this window applies one.
    pub const fn lookback_days(self) -> Option<i64> {
        match self {
            Self::ThreeMonths => Some(90),
            Self::SixMonths => Some(180),
            Self::OneMonth | Self::Custom => None,
        }
    }
}

impl FromStr for TimeWindow {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Provider safety filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SafeSearch {
    Strict,
    #[default]
    Moderate,
    Off,
}

impl SafeSearch {
    pub(crate) const fn as_param(self) -> &'static str {
        match self {
            Self::Strict => "1",
            Self::Moderate => "-1",
            Self::Off => "-2",
        }
    }
}

/// Searches every (country, keyword) pair and collects the hits.
///
/// Shorthand for [`NewsBuilder`] with default regions, safety level and result cap.
///
/// # Errors
///
/// Returns `DeskError::InvalidParams` if `keywords` or `countries` is empty. Provider
/// failures never surface here; see [`NewsBatch::failures`].
pub async fn fetch_news<K, C>(
    client: &DeskClient,
    keywords: impl IntoIterator<Item = K>,
    countries: impl IntoIterator<Item = C>,
    window: TimeWindow,
) -> Result<NewsBatch, DeskError>
where
    K: Into<String>,
    C: Into<String>,
{
    NewsBuilder::new(client)
        .keywords(keywords)
        .countries(countries)
        .window(window)
        .fetch()
        .await
}

/// A builder for a keyword × country news search.
pub struct NewsBuilder {
    client: DeskClient,
    keywords: Vec<String>,
    countries: Vec<String>,
    window: TimeWindow,
    regions: CountryRegionMap,
    safe_search: SafeSearch,
    max_results: usize,
    as_of: Option<DateTime<Utc>>,
    cache_mode: CacheMode,
}

impl NewsBuilder {
    /// Creates a builder with no keywords or countries yet.
    pub fn new(client: &DeskClient) -> Self {
        Self {
            client: client.clone(),
            keywords: Vec::new(),
            countries: Vec::new(),
            window: TimeWindow::default(),
            regions: CountryRegionMap::default(),
            safe_search: SafeSearch::default(),
            max_results: DEFAULT_MAX_RESULTS,
            as_of: None,
            cache_mode: CacheMode::Use,
        }
    }

    /// Adds keywords. Duplicates are ignored; first occurrence decides the order.
    #[must_use]
    pub fn keywords<K: Into<String>>(mut self, keywords: impl IntoIterator<Item = K>) -> Self {
        push_unique(&mut self.keywords, keywords);
        self
    }

    /// Adds countries. Duplicates are ignored; first occurrence decides the order.
    #[must_use]
    pub fn countries<C: Into<String>>(mut self, countries: impl IntoIterator<Item = C>) -> Self {
        push_unique(&mut self.countries, countries);
        self
    }

    #[must_use]
    pub const fn window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Uses a custom country → region map instead of the built-in one.
    #[must_use]
    pub fn regions(mut self, regions: CountryRegionMap) -> Self {
        self.regions = regions;
        self
    }

    #[must_use]
    pub const fn safe_search(mut self, level: SafeSearch) -> Self {
        self.safe_search = level;
        self
    }

    /// Caps the hits kept per (keyword, country) pair. Default: 10.
    #[must_use]
    pub const fn max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Pins "now" for the 3/6-month cut. Defaults to the wall clock at fetch time.
    #[must_use]
    pub const fn as_of(mut self, now: DateTime<Utc>) -> Self {
        self.as_of = Some(now);
        self
    }

    /// Sets the cache mode for this specific call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Runs every search and returns the collected batch.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidParams` if no keyword or no country was given.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self),
            err,
            fields(window = ?self.window, keywords = self.keywords.len(), countries = self.countries.len())
        )
    )]
    pub async fn fetch(self) -> Result<NewsBatch, DeskError> {
        if self.keywords.is_empty() {
            return Err(DeskError::InvalidParams(
                "at least one keyword is required".into(),
            ));
        }
        if self.countries.is_empty() {
            return Err(DeskError::InvalidParams(
                "at least one country is required".into(),
            ));
        }

        let now = self.as_of.unwrap_or_else(Utc::now);
        let mut batch = NewsBatch::default();

        for country in &self.countries {
            let region = if let Some(r) = self.regions.lookup(country) {
                r
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    country = %country,
                    region = %self.regions.default_region(),
                    "unmapped country, using fallback region"
                );
                batch.fallback_countries.push(country.clone());
                self.regions.default_region()
            };

            for keyword in &self.keywords {
                let query = api::PairQuery {
                    keyword,
                    country,
                    region,
                    range_bucket: self.window.range_bucket(),
                    safe_search: self.safe_search,
                    max_results: self.max_results,
                    cache_mode: self.cache_mode,
                };

                match api::search_pair(&self.client, &query).await {
                    Ok(items) => batch.items.extend(items),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            keyword = %keyword,
                            country = %country,
                            error = %error,
                            "news search failed"
                        );
                        batch.failures.push(PairFailure {
                            keyword: keyword.clone(),
                            country: country.clone(),
                            region: region.to_string(),
                            error,
                        });
                    }
                }
            }
        }

        if let Some(days) = self.window.lookback_days() {
            batch.retain_since(now - Duration::days(days));
        }

        Ok(batch)
    }
}

fn push_unique<T: Into<String>>(dst: &mut Vec<String>, src: impl IntoIterator<Item = T>) {
    for s in src {
        let s = s.into();
        if !dst.contains(&s) {
            dst.push(s);
        }
    }
}
