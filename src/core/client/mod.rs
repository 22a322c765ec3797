//! Public client surface + builder.
//! Internals are split into `token` (search `vqd` tokens) and `constants` (UA + defaults).

mod constants;
mod token;

use crate::core::{DeskError, net};
use constants::{DEFAULT_BASE_CHART, DEFAULT_BASE_NEWS, DEFAULT_BASE_SEARCH, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Shared HTTP client for the news and market-data providers.
///
/// Cloning is cheap; clones share the token map and the response cache.
#[derive(Debug, Clone)]
pub struct DeskClient {
    http: Client,
    base_search: Url,
    base_news: Url,
    base_chart: Url,

    tokens: Arc<RwLock<HashMap<String, String>>>,
    cache: Option<Arc<CacheStore>>,
}

impl DeskClient {
    /// Create a new builder.
    pub fn builder() -> DeskClientBuilder {
        DeskClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }

    /// Whether a response cache was configured via [`DeskClientBuilder::cache_ttl`].
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drops every cached response and every remembered search token.
    ///
    /// This is what a dashboard's "refresh" button should call before fetching again.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
        self.tokens.write().await.clear();
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        store.map.write().await.insert(url.as_str().to_string(), entry);
    }

    /// Sends a request once and maps non-2xx statuses to [`DeskError`].
    pub(crate) async fn send(&self, req: RequestBuilder) -> Result<Response, DeskError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DeskError::from_status(status.as_u16(), resp.url().as_str()));
        }
        Ok(resp)
    }

    /// GETs `url` and returns the body, honoring `cache_mode`.
    pub(crate) async fn get_text_cached(
        &self,
        url: &Url,
        cache_mode: CacheMode,
        endpoint: &str,
        key: &str,
    ) -> Result<String, DeskError> {
        if cache_mode == CacheMode::Use
            && let Some(body) = self.cache_get(url).await
        {
            return Ok(body);
        }

        let req = self
            .http
            .get(url.clone())
            .header("accept", "application/json");
        let resp = self.send(req).await?;
        let body = net::get_text(resp, endpoint, key, "json").await?;

        if cache_mode != CacheMode::Bypass {
            self.cache_put(url, &body, None).await;
        }
        Ok(body)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DeskClientBuilder {
    user_agent: Option<String>,
    base_search: Option<Url>,
    base_news: Option<Url>,
    base_chart: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl DeskClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the search landing page used to obtain query tokens (e.g., `https://duckduckgo.com/`).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the news search endpoint (e.g., `https://duckduckgo.com/news.js`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub const fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<DeskClient, DeskError> {
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DeskClient {
            http,
            base_search,
            base_news,
            base_chart,
            tokens: Arc::new(RwLock::new(HashMap::new())),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
