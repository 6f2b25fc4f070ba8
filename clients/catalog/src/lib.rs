//! Reference-data providers for the invoice preview pipeline.
//!
//! The preview engine consumes already-resolved catalogs; this crate owns
//! the fetch boundary. `HttpCatalogClient` talks to the catalog service,
//! the cache wrappers add explicit keyed caching with TTL invalidation, and
//! `resolve_reference_data` assembles a `ResolvedCatalogs` while skipping
//! round-trips the preview inputs cannot use.

pub mod cache;
pub mod http;
pub mod resolver;

use async_trait::async_trait;
use billing_contracts::{AddonCatalogEntry, TaxRateResponse};
use thiserror::Error;

pub use cache::{CachedAddonCatalog, CachedTaxRates};
pub use http::HttpCatalogClient;
pub use resolver::resolve_reference_data;

/// Errors at the catalog fetch boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Addon catalog lookup with nested price lists.
#[async_trait]
pub trait AddonCatalogProvider: Send + Sync {
    async fn list_addons(&self) -> Result<Vec<AddonCatalogEntry>, CatalogError>;
}

/// Published tax-rate lookup, restricted to a referenced code set.
#[async_trait]
pub trait TaxRateProvider: Send + Sync {
    async fn list_tax_rates(&self, codes: &[String]) -> Result<Vec<TaxRateResponse>, CatalogError>;
}
