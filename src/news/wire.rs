use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default)]
    pub(crate) results: Option<Vec<RawHit>>,
}

#[derive(Deserialize)]
pub(crate) struct RawHit {
    #[serde(default)]
    pub(crate) date: Option<RawDate>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) excerpt: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
}

/// The provider normally sends unix seconds, but strings show up too.
///
/// Any other shape lands in `Other` so one odd hit cannot fail the whole page.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDate {
    Unix(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}
