//! Keyed response caching
//!
//! Explicit caches over the provider traits, keyed by request parameters
//! with TTL expiry and manual invalidation. Tax-rate responses are keyed by
//! the normalized code set, so a response fetched for one code set can
//! never be applied to a preview that now references a different set.

use async_trait::async_trait;
use billing_contracts::{AddonCatalogEntry, TaxRateResponse};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::{AddonCatalogProvider, CatalogError, TaxRateProvider};

/// Staleness window used when callers don't pick one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    fetched_at: Instant,
    value: T,
}

impl<T: Clone> CacheEntry<T> {
    fn fresh(&self, ttl: Duration) -> Option<T> {
        (self.fetched_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

/// Caching wrapper over an addon catalog provider. The addon list takes no
/// parameters, so a single entry suffices.
pub struct CachedAddonCatalog<P> {
    inner: P,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry<Vec<AddonCatalogEntry>>>>,
}

impl<P> CachedAddonCatalog<P> {
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}

#[async_trait]
impl<P: AddonCatalogProvider> AddonCatalogProvider for CachedAddonCatalog<P> {
    async fn list_addons(&self) -> Result<Vec<AddonCatalogEntry>, CatalogError> {
        if let Some(entry) = self.entry.read().await.as_ref() {
            if let Some(value) = entry.fresh(self.ttl) {
                tracing::debug!("Addon catalog cache hit");
                return Ok(value);
            }
        }

        let value = self.inner.list_addons().await?;
        *self.entry.write().await = Some(CacheEntry {
            fetched_at: Instant::now(),
            value: value.clone(),
        });
        Ok(value)
    }
}

/// Caching wrapper over a tax-rate provider, keyed by normalized code set.
pub struct CachedTaxRates<P> {
    inner: P,
    ttl: Duration,
    entries: RwLock<HashMap<Vec<String>, CacheEntry<Vec<TaxRateResponse>>>>,
}

impl<P> CachedTaxRates<P> {
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn invalidate(&self) {
        self.entries.write().await.clear();
    }

    fn cache_key(codes: &[String]) -> Vec<String> {
        let mut key = codes.to_vec();
        key.sort();
        key.dedup();
        key
    }
}

#[async_trait]
impl<P: TaxRateProvider> TaxRateProvider for CachedTaxRates<P> {
    async fn list_tax_rates(&self, codes: &[String]) -> Result<Vec<TaxRateResponse>, CatalogError> {
        let key = Self::cache_key(codes);

        if let Some(entry) = self.entries.read().await.get(&key) {
            if let Some(value) = entry.fresh(self.ttl) {
                tracing::debug!("Tax rate cache hit for {} code(s)", key.len());
                return Ok(value);
            }
        }

        let value = self.inner.list_tax_rates(codes).await?;
        self.entries.write().await.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_contracts::EntityStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AddonCatalogProvider for &CountingProvider {
        async fn list_addons(&self) -> Result<Vec<AddonCatalogEntry>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![AddonCatalogEntry {
                id: "addon_1".to_string(),
                name: "Support".to_string(),
                prices: vec![],
            }])
        }
    }

    #[async_trait]
    impl TaxRateProvider for &CountingProvider {
        async fn list_tax_rates(
            &self,
            codes: &[String],
        ) -> Result<Vec<TaxRateResponse>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(codes
                .iter()
                .map(|code| TaxRateResponse {
                    code: code.clone(),
                    name: None,
                    percentage_value: None,
                    fixed_value: None,
                    status: EntityStatus::Published,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_addon_cache_serves_second_call() {
        let provider = CountingProvider::new();
        let cached = CachedAddonCatalog::new(&provider);

        let first = cached.list_addons().await.unwrap();
        let second = cached.list_addons().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_addon_cache_expires_and_invalidates() {
        let provider = CountingProvider::new();
        let cached = CachedAddonCatalog::with_ttl(&provider, Duration::ZERO);

        cached.list_addons().await.unwrap();
        cached.list_addons().await.unwrap();
        assert_eq!(provider.calls(), 2);

        let provider = CountingProvider::new();
        let cached = CachedAddonCatalog::new(&provider);
        cached.list_addons().await.unwrap();
        cached.invalidate().await;
        cached.list_addons().await.unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_tax_cache_keyed_by_code_set() {
        let provider = CountingProvider::new();
        let cached = CachedTaxRates::new(&provider);

        let vat = vec!["VAT".to_string()];
        let both = vec!["VAT".to_string(), "CITY".to_string()];

        cached.list_tax_rates(&vat).await.unwrap();
        cached.list_tax_rates(&vat).await.unwrap();
        assert_eq!(provider.calls(), 1);

        // A different code set is a different key; no stale cross-serving.
        let rates = cached.list_tax_rates(&both).await.unwrap();
        assert_eq!(provider.calls(), 2);
        assert_eq!(rates.len(), 2);
    }

    #[tokio::test]
    async fn test_tax_cache_key_normalizes_order_and_duplicates() {
        let provider = CountingProvider::new();
        let cached = CachedTaxRates::new(&provider);

        cached
            .list_tax_rates(&["B".to_string(), "A".to_string()])
            .await
            .unwrap();
        cached
            .list_tax_rates(&["A".to_string(), "B".to_string(), "A".to_string()])
            .await
            .unwrap();
        assert_eq!(provider.calls(), 1);
    }
}
