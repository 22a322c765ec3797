use crate::{
    core::{CacheMode, DeskClient, DeskError},
    news::{
        SafeSearch,
        date::{from_unix, parse_published},
        model::NewsItem,
        wire::{self, RawDate},
    },
};

pub(super) struct PairQuery<'a> {
    pub(super) keyword: &'a str,
    pub(super) country: &'a str,
    pub(super) region: &'a str,
    pub(super) range_bucket: &'static str,
    pub(super) safe_search: SafeSearch,
    pub(super) max_results: usize,
    pub(super) cache_mode: CacheMode,
}

/// One search round-trip for a single (keyword, region) pair.
pub(super) async fn search_pair(
    client: &DeskClient,
    q: &PairQuery<'_>,
) -> Result<Vec<NewsItem>, DeskError> {
    let vqd = client.search_token(q.keyword).await?;

    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("l", q.region)
        .append_pair("o", "json")
        .append_pair("noamp", "1")
        .append_pair("q", q.keyword)
        .append_pair("vqd", &vqd)
        .append_pair("p", q.safe_search.as_param())
        .append_pair("df", q.range_bucket);

    // A rejected or garbled page usually means the token went stale; drop it so the
    // next fetch starts from a fresh one.
    let body = match client
        .get_text_cached(&url, q.cache_mode, "news", q.keyword)
        .await
    {
        Ok(body) => body,
        Err(e) => {
            client.forget_token(q.keyword).await;
            return Err(e);
        }
    };
    let envelope: wire::NewsEnvelope = match serde_json::from_str(&body) {
        Ok(env) => env,
        Err(e) => {
            client.forget_token(q.keyword).await;
            return Err(e.into());
        }
    };

    let hits = envelope.results.unwrap_or_default();
    let items = hits
        .into_iter()
        .filter_map(|hit| {
            let title = hit.title?;
            let published_at = hit.date.and_then(|d| decode_date(&d));

            Some(NewsItem {
                keyword: q.keyword.to_string(),
                country: q.country.to_string(),
                region: q.region.to_string(),
                title,
                source: hit.source,
                published_at,
                url: hit.url.unwrap_or_default(),
                summary: hit.excerpt.unwrap_or_default(),
                image: hit.image.filter(|s| !s.is_empty()),
            })
        })
        .take(q.max_results)
        .collect();

    Ok(items)
}

fn decode_date(raw: &RawDate) -> Option<chrono::DateTime<chrono::Utc>> {
    let parsed = match raw {
        RawDate::Unix(secs) => from_unix(*secs),
        // Fractional seconds are dropped.
        #[allow(clippy::cast_possible_truncation)]
        RawDate::Float(secs) if secs.is_finite() => from_unix(secs.trunc() as i64),
        RawDate::Float(_) => None,
        RawDate::Text(s) => parse_published(s),
        RawDate::Other(_) => None,
    };

    #[cfg(feature = "tracing")]
    if parsed.is_none() {
        tracing::debug!(date = %raw_repr(raw), "unparseable publish date");
    }

    parsed
}

#[cfg(feature = "tracing")]
fn raw_repr(raw: &RawDate) -> String {
    match raw {
        RawDate::Unix(n) => n.to_string(),
        RawDate::Float(f) => f.to_string(),
        RawDate::Text(s) => s.clone(),
        RawDate::Other(v) => v.to_string(),
    }
}
