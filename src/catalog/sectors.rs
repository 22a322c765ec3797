use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::DeskError;

const SECTORS_RAW: &[(&str, &[(&str, &str)])] = &[
    (
        "Chipmakers",
        &[
            ("Samsung Electronics", "005930.KS"),
            ("SK hynix", "000660.KS"),
            ("Micron", "MU"),
            ("TSMC", "TSM"),
            ("Intel", "INTC"),
        ],
    ),
    (
        "Chip Designers",
        &[
            ("NVIDIA", "NVDA"),
            ("AMD", "AMD"),
            ("Qualcomm", "QCOM"),
            ("Broadcom", "AVGO"),
        ],
    ),
    (
        "Equipment",
        &[
            ("ASML", "ASML"),
            ("Applied Materials", "AMAT"),
            ("Lam Research", "LRCX"),
            ("Tokyo Electron", "8035.T"),
        ],
    ),
];

static BUILTIN_SECTORS: LazyLock<SectorCatalog> = LazyLock::new(|| SectorCatalog {
    sectors: SECTORS_RAW
        .iter()
        .map(|(label, companies)| Sector {
            name: (*label).to_string(),
            companies: companies
                .iter()
                .map(|(name, ticker)| Company {
                    name: (*name).to_string(),
                    ticker: (*ticker).to_string(),
                })
                .collect(),
        })
        .collect(),
});

/// A tracked company and its ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Display name, e.g. "Micron".
    pub name: String,
    /// Ticker symbol as the market-data provider knows it, e.g. "MU".
    pub ticker: String,
}

/// A sector label and its companies, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub companies: Vec<Company>,
}

/// Read-only universe of tracked securities: sector → company → ticker.
///
/// Order matters: snapshots list sectors and companies exactly as declared here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorCatalog {
    sectors: Vec<Sector>,
}

impl Default for SectorCatalog {
    /// The built-in semiconductor catalog, built once per process.
    fn default() -> Self {
        BUILTIN_SECTORS.clone()
    }
}

impl SectorCatalog {
    /// An empty catalog; add sectors with [`SectorCatalog::sector`].
    pub const fn empty() -> Self {
        Self {
            sectors: Vec::new(),
        }
    }

    /// Appends a sector with its `(company, ticker)` entries.
    #[must_use]
    pub fn sector<N, T>(
        mut self,
        label: impl Into<String>,
        companies: impl IntoIterator<Item = (N, T)>,
    ) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.sectors.push(Sector {
            name: label.into(),
            companies: companies
                .into_iter()
                .map(|(n, t)| Company {
                    name: n.into(),
                    ticker: t.into(),
                })
                .collect(),
        });
        self
    }

    /// Parses a catalog from JSON:
    /// `{"sectors":[{"name":"Chipmakers","companies":[{"name":"Micron","ticker":"MU"}]}]}`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Json` if the document does not match that shape.
    pub fn from_json(json: &str) -> Result<Self, DeskError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sectors in declaration order.
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Whether `ticker` is tracked by any sector.
    pub fn contains_ticker(&self, ticker: &str) -> bool {
        self.sectors
            .iter()
            .flat_map(|s| &s.companies)
            .any(|c| c.ticker == ticker)
    }

    /// Total number of tracked companies.
    pub fn len(&self) -> usize {
        self.sectors.iter().map(|s| s.companies.len()).sum()
    }

    /// Whether no company is tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
