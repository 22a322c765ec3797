//! Daily closing prices from the chart endpoint.

mod wire;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{CacheMode, DeskClient, DeskError};

/// Common ranges Yahoo accepts for daily data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Range {
    D1,
    #[default]
    D5,
    M1,
    M3,
}

impl Range {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }
}

/// One trading session's close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyClose {
    pub ts: DateTime<Utc>,
    pub close: f64,
}

/// Fetches daily closes for `symbol` over `range`, oldest first.
///
/// Sessions with a null close or an out-of-range timestamp are skipped.
///
/// # Errors
///
/// Returns a `DeskError` if the request fails, the provider reports an error for the
/// symbol, or the payload is malformed. An empty vector is not an error here.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_daily_closes(
    client: &DeskClient,
    symbol: &str,
    range: Range,
    cache_mode: CacheMode,
) -> Result<Vec<DailyClose>, DeskError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("range", range.as_str())
        .append_pair("interval", "1d")
        .append_pair("includePrePost", "false");

    let body = client
        .get_text_cached(&url, cache_mode, "history_chart", symbol)
        .await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<Vec<DailyClose>, DeskError> {
    let parsed: wire::ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| DeskError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(DeskError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let Some(r0) = chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };

    let ts = r0.timestamp.unwrap_or_default();
    let closes = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(ts
        .into_iter()
        .zip(closes)
        .filter_map(|(t, close)| {
            let close = close.filter(|c| c.is_finite())?;
            Some(DailyClose {
                ts: DateTime::from_timestamp(t, 0)?,
                close,
            })
        })
        .collect())
}
