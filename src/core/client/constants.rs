//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Search landing page; answers `?q=` with HTML embedding the per-query `vqd` token.
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://duckduckgo.com/";

/// News search JSON endpoint.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://duckduckgo.com/news.js";

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
