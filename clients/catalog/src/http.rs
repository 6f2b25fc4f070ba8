//! HTTP catalog client
//!
//! Fetches the addon catalog and published tax rates from the catalog
//! service. The tax-rate endpoint filters by status only; restriction to the
//! referenced code set happens client-side.

use async_trait::async_trait;
use billing_contracts::{AddonCatalogEntry, TaxRateResponse};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{AddonCatalogProvider, CatalogError, TaxRateProvider};

/// Bulk list endpoints paginate; one page covers the expected catalog size.
const LIST_PAGE_SIZE: u32 = 1000;

/// Thin reqwest-backed client for the catalog service.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    items: Vec<T>,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL from `CATALOG_BASE_URL`, defaulting to the local service.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8085".to_string());
        Self::new(base_url)
    }

    async fn get_items<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, CatalogError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!("Catalog API returned error status: {}", response.status());
            return Err(CatalogError::UnexpectedStatus(response.status()));
        }

        let list: ListResponse<T> = response.json().await?;
        Ok(list.items)
    }
}

#[async_trait]
impl AddonCatalogProvider for HttpCatalogClient {
    async fn list_addons(&self) -> Result<Vec<AddonCatalogEntry>, CatalogError> {
        self.get_items(&format!("/api/addons?limit={}&offset=0", LIST_PAGE_SIZE))
            .await
    }
}

#[async_trait]
impl TaxRateProvider for HttpCatalogClient {
    async fn list_tax_rates(&self, codes: &[String]) -> Result<Vec<TaxRateResponse>, CatalogError> {
        let rates: Vec<TaxRateResponse> = self
            .get_items(&format!(
                "/api/tax-rates?limit={}&status=PUBLISHED",
                LIST_PAGE_SIZE
            ))
            .await?;

        Ok(rates
            .into_iter()
            .filter(|rate| codes.contains(&rate.code))
            .collect())
    }
}
