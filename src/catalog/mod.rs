//! Static configuration: country → region codes and the sector/ticker universe.
//!
//! Both catalogs are immutable values. The built-in versions are materialized once per
//! process and handed out by `Default`; custom ones come from code or JSON.

mod regions;
mod sectors;

pub use regions::{CountryRegionMap, DEFAULT_REGION, RegionEntry};
pub use sectors::{Company, Sector, SectorCatalog};
