use crate::addon::AddonCatalogEntry;
use crate::tax::TaxRateResponse;
use serde::{Deserialize, Serialize};

/// Reference data the preview engine consumes but does not fetch.
///
/// Collaborators resolve these from the addon and tax-rate catalogs before
/// invoking the engine; the engine treats them as immutable inputs so the
/// whole computation stays pure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCatalogs {
    #[serde(default)]
    pub addons: Vec<AddonCatalogEntry>,
    #[serde(default)]
    pub tax_rates: Vec<TaxRateResponse>,
}
