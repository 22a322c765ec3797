use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::DeskError;

/// Region used when a country has no entry.
pub const DEFAULT_REGION: &str = "us-en";

const COUNTRY_TO_REGION_RAW: &[(&str, &str)] = &[
    ("Korea", "kr-kr"),
    ("USA", "us-en"),
    ("Japan", "jp-jp"),
    ("China", "cn-zh"),
    ("Taiwan", "tw-tzh"),
];

static BUILTIN_REGIONS: LazyLock<CountryRegionMap> = LazyLock::new(|| CountryRegionMap {
    entries: COUNTRY_TO_REGION_RAW
        .iter()
        .map(|(country, region)| RegionEntry {
            country: (*country).to_string(),
            region: (*region).to_string(),
        })
        .collect(),
    default_region: DEFAULT_REGION.to_string(),
});

/// One country → region code pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Country name as a user would type it (e.g. "Korea").
    pub country: String,
    /// Provider region code (e.g. "kr-kr").
    pub region: String,
}

/// Ordered, read-only mapping from country name to the search provider's region code.
///
/// Lookups ignore surrounding whitespace and ASCII case. Unknown countries resolve to
/// [`CountryRegionMap::default_region`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRegionMap {
    entries: Vec<RegionEntry>,
    #[serde(default = "default_region")]
    default_region: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for CountryRegionMap {
    /// The built-in five-country map, built once per process.
    fn default() -> Self {
        BUILTIN_REGIONS.clone()
    }
}

impl CountryRegionMap {
    /// Builds a map from `(country, region)` pairs, keeping their order.
    pub fn new<C, R>(pairs: impl IntoIterator<Item = (C, R)>) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(c, r)| RegionEntry {
                    country: c.into(),
                    region: r.into(),
                })
                .collect(),
            default_region: default_region(),
        }
    }

    /// Parses a map from JSON: `{"entries":[{"country":"Korea","region":"kr-kr"}], "default_region":"us-en"}`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Json` if the document does not match that shape.
    pub fn from_json(json: &str) -> Result<Self, DeskError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the fallback region.
    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// The region code used for unmapped countries.
    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    /// Mapped entries in declaration order.
    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    /// Returns the region for `country`, or `None` if it is unmapped.
    pub fn lookup(&self, country: &str) -> Option<&str> {
        let wanted = country.trim();
        self.entries
            .iter()
            .find(|e| e.country.eq_ignore_ascii_case(wanted))
            .map(|e| e.region.as_str())
    }

    /// Returns the region for `country`, falling back to the default region.
    pub fn resolve(&self, country: &str) -> &str {
        self.lookup(country).unwrap_or(&self.default_region)
    }
}
